//! Splits canonical SMILES into the lexical units a language model sees

use std::collections::BTreeSet;

/// Collect the distinct tokens of `smiles`. A token is a bracketed atom like
/// `[nH]`, a two-digit ring closure like `%10`, or any other single
/// character.
///
/// A `[` without a closing `]` swallows the rest of the string as one token.
/// That token can never be in a vocabulary, so the molecule is rejected
/// rather than silently truncated.
pub fn tokenize(smiles: &str) -> BTreeSet<&str> {
    let mut ret = BTreeSet::new();
    let mut chars = smiles.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '[' => match smiles[i..].find(']') {
                Some(off) => i + off + 1,
                None => smiles.len(),
            },
            '%' if is_ring_number(&smiles[i + 1..]) => i + 3,
            _ => i + c.len_utf8(),
        };
        ret.insert(&smiles[i..end]);
        // skip whatever the token consumed beyond its first char
        while chars.peek().is_some_and(|&(j, _)| j < end) {
            chars.next();
        }
    }
    ret
}

/// `rest` begins with exactly the two digits of a `%NN` ring closure
fn is_ring_number(rest: &str) -> bool {
    let b = rest.as_bytes();
    b.len() >= 2 && b[0].is_ascii_digit() && b[1].is_ascii_digit()
}
