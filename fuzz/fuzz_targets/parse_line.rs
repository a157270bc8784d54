use dicttool::{parse_line, HeaderLayout};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(line) = std::str::from_utf8(data) {
                if let Ok(Some(entry)) = parse_line(line, &HeaderLayout::default()) {
                    assert_eq!(entry.definition.trim(), entry.definition);
                    assert!(entry.synonyms.is_empty());
                }
            }
        });
    }
}
