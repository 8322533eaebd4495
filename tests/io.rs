use std::fs;
use std::path::PathBuf;

use ndmat::prelude::*;
use ndmat_gen::ArrayBuilder;

fn temp_path(name: &str) -> PathBuf
{
    std::env::temp_dir().join(format!("ndmat-{}-{}", std::process::id(), name))
}

#[test]
fn binary_round_trip()
{
    let a = ArrayBuilder::new((3, 4)).build::<f64>() * 0.5;
    let path = a.dump(temp_path("binary")).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("bin"));
    assert_eq!(fs::metadata(&path).unwrap().len(), 12 * 8);

    let mut b = from_file::<f64, _>(&path).unwrap();
    assert_eq!(b.shape(), Shape::new(1, 12));
    b.reshape(3, 4).unwrap();
    assert_eq!(a, b);
    fs::remove_file(path).unwrap();
}

#[test]
fn explicit_extension_is_kept()
{
    let a = NdArray::from_vec(vec![1u16, 2, 65535]);
    let path = a.to_file(temp_path("explicit.dat")).unwrap();
    assert!(path.to_string_lossy().ends_with("explicit.dat"));
    assert_eq!(load::<u16, _>(&path).unwrap(), a);
    fs::remove_file(path).unwrap();
}

#[test]
fn text_round_trip()
{
    let a = NdArray::from_rows(vec![vec![1.5, -2.], vec![3.25, 4.]]).unwrap();
    let path = a.to_file_text(temp_path("text"), ',').unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1.5,-2,3.25,4");

    let b = from_file_text::<f64, _>(&path, ',').unwrap();
    assert_eq!(b.as_slice(), a.as_slice());
    fs::remove_file(path).unwrap();
}

#[test]
fn text_across_lines()
{
    let path = temp_path("lines.txt");
    fs::write(&path, "1 2 3\n4 5 6\n").unwrap();
    let a = from_file_text::<i32, _>(&path, ' ').unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);

    fs::write(&path, "1 two 3").unwrap();
    let err = from_file_text::<i32, _>(&path, ' ').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_is_runtime_error()
{
    let path = temp_path("does-not-exist.bin");
    assert_eq!(from_file::<u8, _>(&path).unwrap_err().kind(), ErrorKind::Runtime);
    assert_eq!(from_file_text::<u8, _>(&path, ' ').unwrap_err().kind(), ErrorKind::Runtime);

    let a = NdArray::from_vec(vec![1u8]);
    let bad = temp_path("no-such-dir").join("x.bin");
    assert_eq!(a.dump(bad).unwrap_err().kind(), ErrorKind::Runtime);
}

#[test]
fn data_cube_dump()
{
    let mut cube = DataCube::new();
    cube.push_back(NdArray::from_vec(vec![1i32, 2])).unwrap();
    cube.push_back(NdArray::from_vec(vec![3i32, 4])).unwrap();
    let path = cube.dump(temp_path("cube")).unwrap();
    let all = from_file::<i32, _>(&path).unwrap();
    assert_eq!(all.as_slice(), &[1, 2, 3, 4]);
    fs::remove_file(path).unwrap();
}
