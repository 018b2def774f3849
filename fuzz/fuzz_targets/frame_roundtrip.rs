use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            match llamapack::frame(data) {
                Ok(framed) => {
                    let (len, payload) = llamapack::unframe(&framed).unwrap();
                    assert_eq!(len as usize, data.len());
                    assert_eq!(payload, data);
                }
                Err(_) => assert!(data.len() > 255),
            }
        });
    }
}
