//! # Code128 Symbol Table
//!
//! The 107 symbols of Code128 as data rows: index, Subset B character and
//! bar/space pattern. Indices 103-106 are control symbols and carry a `'*'`
//! placeholder character.
//!
//! The table keeps the exact row data the encoder has always used. Some rows
//! share a character (`'{'`, `'}'`, `'E'`, `'I'`), so lookup by character is
//! a linear scan where the first listed row wins.

/// Number of modules in every symbol pattern.
pub const MODULE_LEN: usize = 11;

/// Number of data symbols (indices 0-102). Also the checksum modulus.
pub const CHAR_COUNT: usize = 103;

/// Index of the Start Code B symbol.
pub const START_CODE_B: usize = 104;

/// Index of the Stop symbol.
pub const STOP_CODE: usize = 106;

/// Bar modules appended after the Stop symbol.
pub const SEQUENCE_TERMINATOR: &str = "11";

/// One row of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTableEntry {
    /// Encoding value, used in checksum arithmetic.
    pub index: usize,
    /// Subset B character, or `'*'` for control symbols.
    pub character: char,
    /// Bar ('1') / space ('0') modules, always [`MODULE_LEN`] long.
    pub pattern: &'static str,
}

const fn entry(index: usize, character: char, pattern: &'static str) -> SymbolTableEntry {
    SymbolTableEntry {
        index,
        character,
        pattern,
    }
}

/// All 107 Code128 symbols, ordered by index.
pub static SYMBOLS: [SymbolTableEntry; 107] = [
    entry(0, ' ', "11011001100"),
    entry(1, '!', "11001101100"),
    entry(2, '~', "11001100110"),
    entry(3, '#', "10010011000"),
    entry(4, '$', "10010001100"),
    entry(5, '%', "10001001100"),
    entry(6, '&', "10011001000"),
    entry(7, '\'', "10011000100"),
    entry(8, '(', "10001100100"),
    entry(9, ')', "11001001000"),
    entry(10, '*', "11001000100"),
    entry(11, '+', "11000100100"),
    entry(12, ',', "10110011100"),
    entry(13, '-', "10011011100"),
    entry(14, '.', "10011001110"),
    entry(15, '/', "10111001100"),
    entry(16, '0', "10011101100"),
    entry(17, '1', "10011100110"),
    entry(18, '2', "11001110010"),
    entry(19, '3', "11001011100"),
    entry(20, '4', "11001001110"),
    entry(21, '5', "11011100100"),
    entry(22, '6', "11001110100"),
    entry(23, '7', "11101101110"),
    entry(24, '8', "11101001100"),
    entry(25, '9', "11100101100"),
    entry(26, ':', "11100100110"),
    entry(27, ';', "11101100100"),
    entry(28, '{', "11100110100"),
    entry(29, '=', "11100110010"),
    entry(30, '}', "11011011000"),
    entry(31, '?', "11011000110"),
    entry(32, '@', "11000110110"),
    entry(33, 'A', "10100011000"),
    entry(34, 'B', "10001011000"),
    entry(35, 'C', "10001000110"),
    entry(36, 'D', "10110001000"),
    entry(37, 'E', "10001101000"),
    entry(38, 'F', "10001100010"),
    entry(39, 'G', "11010001000"),
    entry(40, 'H', "11000101000"),
    entry(41, 'I', "11000100010"),
    entry(42, 'J', "10110111000"),
    entry(43, 'K', "10110001110"),
    entry(44, 'L', "10001101110"),
    entry(45, 'M', "10111011000"),
    entry(46, 'N', "10111000110"),
    entry(47, 'O', "10001110110"),
    entry(48, 'P', "11101110110"),
    entry(49, 'Q', "11010001110"),
    entry(50, 'R', "11000101110"),
    entry(51, 'S', "11011101000"),
    entry(52, 'T', "11011100010"),
    entry(53, 'U', "11011101110"),
    entry(54, 'V', "11101011000"),
    entry(55, 'W', "11101000110"),
    entry(56, 'X', "11100010110"),
    entry(57, 'Y', "11101101000"),
    entry(58, 'Z', "11101100010"),
    entry(59, '[', "11100011010"),
    entry(60, '\\', "11101111010"),
    entry(61, ']', "11001000010"),
    entry(62, '^', "11110001010"),
    entry(63, '_', "10100110000"),
    entry(64, '`', "10100001100"),
    entry(65, 'a', "10010110000"),
    entry(66, 'b', "10010000110"),
    entry(67, 'c', "10000101100"),
    entry(68, 'd', "10000100110"),
    entry(69, 'e', "10110010000"),
    entry(70, 'f', "10110000100"),
    entry(71, 'g', "10011010000"),
    entry(72, 'h', "10011000010"),
    entry(73, 'i', "10000110100"),
    entry(74, 'j', "10000110010"),
    entry(75, 'k', "11000010010"),
    entry(76, 'l', "11001010000"),
    entry(77, 'm', "11110111010"),
    entry(78, 'n', "11000010100"),
    entry(79, 'o', "10001111010"),
    entry(80, 'p', "10100111100"),
    entry(81, 'q', "10010111100"),
    entry(82, 'r', "10010011110"),
    entry(83, 's', "10111100100"),
    entry(84, 't', "10011110100"),
    entry(85, 'u', "10011110010"),
    entry(86, 'v', "11110100100"),
    entry(87, 'w', "11110010100"),
    entry(88, 'x', "11110010010"),
    entry(89, 'y', "11011011110"),
    entry(90, 'z', "11011110110"),
    entry(91, '{', "11110110110"),
    entry(92, '|', "10101111000"),
    entry(93, '}', "10100011110"),
    entry(94, 'E', "10001011110"),
    entry(95, 'E', "10111101000"),
    entry(96, 'E', "10111100010"),
    entry(97, 'E', "11110101000"),
    entry(98, 'E', "11110100010"),
    entry(99, 'I', "10111011110"),
    entry(100, 'I', "10111101110"),
    entry(101, 'I', "11101011110"),
    entry(102, 'I', "11110101110"),
    entry(103, '*', "11010000100"), // Start Code A
    entry(104, '*', "11010010000"), // Start Code B
    entry(105, '*', "11010011100"), // Start Code C
    entry(106, '*', "11000111010"), // Stop
];

/// Find the index of the first table row whose character is `c`.
///
/// Returns `None` when no row carries `c`. Duplicated characters resolve to
/// the lowest index, so `'{'` is 28 and never 91.
pub fn lookup_index_by_character(c: char) -> Option<usize> {
    SYMBOLS.iter().position(|entry| entry.character == c)
}

/// Pattern of the symbol at `index`.
///
/// # Panics
///
/// Panics if `index` is 107 or above; callers only pass table indices.
pub fn pattern(index: usize) -> &'static str {
    SYMBOLS[index].pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(SYMBOLS.len(), 107);
        for (pos, entry) in SYMBOLS.iter().enumerate() {
            assert_eq!(entry.index, pos);
            assert_eq!(entry.pattern.len(), MODULE_LEN, "row {}", pos);
            assert!(entry.pattern.bytes().all(|b| b == b'0' || b == b'1'));
        }
    }

    #[test]
    fn test_control_symbols() {
        for index in 103..107 {
            assert_eq!(SYMBOLS[index].character, '*');
        }
        assert_eq!(pattern(START_CODE_B), "11010010000");
        assert_eq!(pattern(STOP_CODE), "11000111010");
    }

    #[test]
    fn test_lookup_letters_and_digits() {
        assert_eq!(lookup_index_by_character(' '), Some(0));
        assert_eq!(lookup_index_by_character('0'), Some(16));
        assert_eq!(lookup_index_by_character('A'), Some(33));
        assert_eq!(lookup_index_by_character('a'), Some(65));
        assert_eq!(lookup_index_by_character('|'), Some(92));
    }

    #[test]
    fn test_lookup_first_match_wins() {
        assert_eq!(lookup_index_by_character('{'), Some(28));
        assert_eq!(lookup_index_by_character('}'), Some(30));
        assert_eq!(lookup_index_by_character('E'), Some(37));
        assert_eq!(lookup_index_by_character('I'), Some(41));
        assert_eq!(lookup_index_by_character('~'), Some(2));
        // The placeholder of the control rows is also a data character
        assert_eq!(lookup_index_by_character('*'), Some(10));
    }

    #[test]
    fn test_lookup_missing() {
        assert_eq!(lookup_index_by_character('"'), None);
        assert_eq!(lookup_index_by_character('<'), None);
        assert_eq!(lookup_index_by_character('\n'), None);
        assert_eq!(lookup_index_by_character('é'), None);
    }
}
