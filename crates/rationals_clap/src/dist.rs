// https://en.wikipedia.org/wiki/Levenshtein_distance
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + (ca != cb) as usize;
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
