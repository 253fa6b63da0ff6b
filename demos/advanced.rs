fn main() {
    // 30 ASCII bytes followed by a bare continuation byte: the vector path
    // rejects its single 32-byte block and delegates to the scalar path,
    // which reports the offset of the malformed byte.
    let mut data = [b'a'; 32];
    data[30] = 0x80;
    data[31] = 0x01;

    let vector_result = rangeutf8::validate(&data);
    let scalar_result = rangeutf8::validate_scalar(&data);

    assert_eq!(vector_result, scalar_result);

    match vector_result {
        Ok(()) => unreachable!("this buffer is malformed"),
        Err(err) => println!("both validators agree: malformed at byte {}", err.valid_up_to()),
    }
}
