mod impl_numeric;
