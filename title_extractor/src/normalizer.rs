use crate::rules::{
    glyphs::{KEPT_PUNCTUATION, correct_token},
    whitespace::{join_letter_spaced, normalize_whitespace},
};

/// Turns raw recognizer output into cleaned text.
///
/// Line structure is preserved so the classifier can look at each line on its
/// own; blank lines are dropped. Running this on its own output is a no-op.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn normalize_line(line: &str) -> String {
    let mut s = join_letter_spaced(line);
    s = s.replace('&', " AND ");
    s = s
        .split_whitespace()
        .map(correct_token)
        .collect::<Vec<_>>()
        .join(" ");
    s = strip_disallowed(&s);
    normalize_whitespace(&s)
}

fn strip_disallowed(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let test_cases = vec![
            ("57REE7 FI6H7ER ||", "STREET FIGHTER II"),
            ("50N1C 7HE HED6EH06", "SONIC THE HEDGEHOG"),
            ("F1N4L F4N745Y V1", "FINAL FANTASY VI"),
            ("DRA60N *QUE57* |||", "DRAGON QUEST III"),
            ("5UP€R M4R10 8R05", "SUPER MARIO BROS"),
            ("5 U P E R   M O N 4 C 0   6 P   | |", "SUPER MONACO GP II"),
            ("Ma5ter 5y5tem", "Master system"),
            ("Streets of Rage 2", "Streets of Rage 2"),
            ("Dungeons & Dragons", "Dungeons AND Dragons"),
            ("Price: $29.99", "Price: 29.99"),
            ("Gran Turismo (PS2)", "Gran Turismo (PS2)"),
            ("", ""),
            ("   \n\t  ", ""),
        ];
        for (input, expected) in test_cases {
            assert_eq!(normalize(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_normalize_keeps_lines() {
        assert_eq!(
            normalize("SEGA\n    Ma5ter 5y5tem\n\n    M0N4C0 6P"),
            "SEGA\nMaster system\nMONACO GP"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = vec![
            "5UP ER MON ACO 6P ||",
            ": 5ema 8 M@N4C0 6P || sema We) ee MIS",
            "5 U P E R   M O N 4 C 0   6 P   | |",
            "R$ 150,00 *** condition: USED ***",
            "x*5 P'S2 (3RD)x #1 @home",
            "ドラゴンクエスト III",
            "|||| ! | l1",
            "a  b  c",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {:?}", input);
        }
    }
}
