use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // Must never panic, only return errors on short input.
            if let Ok((len, payload)) = llamapack::unframe(data) {
                assert_eq!(payload.len(), len as usize);
            }
        });
    }
}
