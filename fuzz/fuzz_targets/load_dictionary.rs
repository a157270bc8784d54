use dicttool::{query, Dictionary};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(dict) = Dictionary::from_slice(data) {
                for entry in &dict {
                    assert!(query(&dict, &entry.word).is_found());
                }
            }
        });
    }
}
