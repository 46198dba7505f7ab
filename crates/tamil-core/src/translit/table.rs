//! Static grapheme tables for Tamil → Latin romanization.

/// Independent vowels (uyir) in table order.
pub(crate) const UYIR: [(char, &str); 12] = [
    ('அ', "a"),
    ('ஆ', "aa"),
    ('இ', "i"),
    ('ஈ', "ii"),
    ('உ', "u"),
    ('ஊ', "uu"),
    ('எ', "e"),
    ('ஏ', "ee"),
    ('ஐ', "ai"),
    ('ஒ', "o"),
    ('ஓ', "oo"),
    ('ஔ', "au"),
];

/// Consonants (mei) with their pulli-suppressed romanization.
pub(crate) const MEI: [(char, &str); 18] = [
    ('க', "k"),
    ('ங', "ng"),
    ('ச', "ch"),
    ('ஞ', "nj"),
    ('ட', "t"),
    ('ண', "nn"),
    ('த', "th"),
    ('ந', "n"),
    ('ப', "p"),
    ('ம', "m"),
    ('ய', "y"),
    ('ர', "r"),
    ('ல', "l"),
    ('வ', "v"),
    ('ழ', "zh"),
    ('ள', "ll"),
    ('ற', "rr"),
    ('ன', "nnn"),
];

/// Consonant × vowel matrix (uyirmei).
///
/// Row `j` follows `MEI`. Column 0 is the bare consonant; column `k + 1` is
/// the consonant carrying vowel `UYIR[k]`.
pub(crate) const UYIRMEI: [[&str; 13]; 18] = [
    ["k", "ka", "kaa", "ki", "kee", "ku", "kuu", "ke", "kee", "kai", "ko", "koo", "kau"],
    ["ng", "nga", "ngaa", "ngi", "ngee", "ngu", "nguu", "nge", "ngee", "ngai", "ngo", "ngoo", "ngau"],
    ["ch", "cha", "chaa", "chi", "chee", "chu", "chuu", "che", "chee", "chai", "cho", "choo", "chau"],
    ["nj", "nja", "njaa", "nji", "njee", "nju", "njuu", "nje", "njee", "njai", "njo", "njoo", "njau"],
    ["t", "ta", "taa", "ti", "tee", "tu", "tuu", "te", "tee", "tai", "to", "too", "tau"],
    ["nn", "nna", "nnaa", "nni", "nnee", "nnu", "nnuu", "nne", "nnee", "nnai", "nno", "nnoo", "nnau"],
    ["th", "tha", "thaa", "thi", "thee", "thu", "thuu", "the", "thee", "thai", "tho", "thoo", "thau"],
    ["n", "na", "naa", "ni", "nee", "nu", "nuu", "ne", "nee", "nai", "no", "noo", "nau"],
    ["p", "pa", "paa", "pi", "pee", "pu", "puu", "pe", "pee", "pai", "po", "poo", "pau"],
    ["m", "ma", "maa", "mi", "mee", "mu", "muu", "me", "mee", "mai", "mo", "moo", "mau"],
    ["y", "ya", "yaa", "yi", "yee", "yu", "yuu", "ye", "yee", "yai", "yo", "yoo", "yau"],
    ["r", "ra", "raa", "ri", "ree", "ru", "ruu", "re", "ree", "rai", "ro", "roo", "rau"],
    ["l", "la", "laa", "li", "lee", "lu", "luu", "le", "lee", "lai", "lo", "loo", "lau"],
    ["v", "va", "vaa", "vi", "vee", "vu", "vuu", "ve", "vee", "vai", "vo", "voo", "vau"],
    ["zh", "zha", "zhaa", "zhi", "zhee", "zhu", "zhuu", "zhe", "zhee", "zhai", "zho", "zhoo", "zhau"],
    ["ll", "lla", "llaa", "lli", "llee", "llu", "lluu", "lle", "llee", "llai", "llo", "lloo", "llau"],
    ["rr", "rra", "rraa", "rri", "rree", "rru", "rruu", "rre", "rree", "rrai", "rro", "rroo", "rrau"],
    ["nnn", "nnna", "nnnaa", "nnni", "nnnee", "nnnu", "nnnuu", "nnne", "nnnee", "nnnai", "nnno", "nnnoo", "nnnau"],
];

pub(crate) fn uyir_index(ch: char) -> Option<usize> {
    UYIR.iter().position(|&(c, _)| c == ch)
}

pub(crate) fn mei_index(ch: char) -> Option<usize> {
    MEI.iter().position(|&(c, _)| c == ch)
}

/// Map a dependent vowel sign to the `UYIR` index of the vowel it writes.
///
/// The inherent `a` (index 0) has no sign, so results are always 1..=11.
pub(crate) fn vowel_sign_index(ch: char) -> Option<usize> {
    match ch {
        'ா' => Some(1),
        'ி' => Some(2),
        'ீ' => Some(3),
        'ு' => Some(4),
        'ூ' => Some(5),
        'ெ' => Some(6),
        'ே' => Some(7),
        'ை' => Some(8),
        'ொ' => Some(9),
        'ோ' => Some(10),
        'ௌ' => Some(11),
        _ => None,
    }
}

/// Romanize consonant row `row` followed by the vowel sign at `sign`.
pub(crate) fn uyirmei(row: usize, sign: usize) -> &'static str {
    UYIRMEI[row][sign + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNS: &str = "ாிீுூெேைொோௌ";

    #[test]
    fn test_bare_column_matches_mei() {
        for (j, &(_, bare)) in MEI.iter().enumerate() {
            assert_eq!(UYIRMEI[j][0], bare, "row {j}");
        }
    }

    #[test]
    fn test_inherent_column_appends_a() {
        for (j, &(_, bare)) in MEI.iter().enumerate() {
            assert_eq!(UYIRMEI[j][1], format!("{bare}a"), "row {j}");
        }
    }

    #[test]
    fn test_vowel_order() {
        let vowels: String = UYIR.iter().map(|&(c, _)| c).collect();
        assert_eq!(vowels, "அஆஇஈஉஊஎஏஐஒஓஔ");
        let consonants: String = MEI.iter().map(|&(c, _)| c).collect();
        assert_eq!(consonants, "கஙசஞடணதநபமயரலவழளறன");
    }

    #[test]
    fn test_sign_indices_are_distinct_and_in_range() {
        let indices: Vec<usize> = SIGNS.chars().filter_map(vowel_sign_index).collect();
        assert_eq!(indices, (1..=11).collect::<Vec<_>>());
        assert_eq!(vowel_sign_index('்'), None);
        assert_eq!(vowel_sign_index('அ'), None);
    }

    #[test]
    fn test_uyirmei_lookup() {
        assert_eq!(uyirmei(0, 1), "kaa");
        assert_eq!(uyirmei(0, 2), "ki");
        assert_eq!(uyirmei(9, 8), "mai");
        assert_eq!(uyirmei(17, 11), "nnnau");
    }
}
