fn main() {
    let data = b"hello world!";

    match rangeutf8::validate(data) {
        Ok(()) => println!("valid utf-8: {} bytes", data.len()),
        Err(err) => println!("invalid utf-8 at byte {}", err.valid_up_to()),
    }
}
