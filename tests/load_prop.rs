use quickcheck::quickcheck;
use dicttool::{Dictionary, WordEntry};

quickcheck! {
    fn loading_twice_is_identical(rows: Vec<(String, String, Vec<String>)>) -> bool {
        let entries: Vec<WordEntry> = rows
            .into_iter()
            .map(|(w, d, s)| WordEntry::new(w, d).with_synonyms(s))
            .collect();
        let bytes = serde_json::to_vec(&entries).unwrap();
        let a = Dictionary::from_slice(&bytes).unwrap();
        let b = Dictionary::from_slice(&bytes).unwrap();
        a == b
    }

    fn every_key_matches_its_entry(rows: Vec<(String, String)>) -> bool {
        let entries: Vec<WordEntry> = rows.into_iter().map(|(w, d)| WordEntry::new(w, d)).collect();
        let dict = Dictionary::from_entries(entries.clone());
        entries.iter().all(|e| dict.contains(&e.word))
            && dict.iter().all(|e| dict.get(&e.word) == Some(e))
    }
}
