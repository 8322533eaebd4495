// Numerical accuracy tests live in tests/.
