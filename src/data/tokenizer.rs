//! Row Tokenizer Module
//! Splits a single CSV line into field strings.

/// Splits one CSV line into fields.
///
/// A `"` toggles quoted mode and is dropped from the output. Commas inside
/// quoted mode are kept as literal characters. An unterminated quote keeps
/// the rest of the line in quoted mode.
pub struct RowTokenizer;

impl RowTokenizer {
    /// Tokenize a line. The last field is always emitted, so an empty line
    /// yields a single empty field.
    pub fn tokenize(line: &str) -> Vec<String> {
        let mut inside_quotes = false;
        let mut values: Vec<String> = Vec::new();
        let mut current = String::new();

        for ch in line.chars() {
            match ch {
                '"' => inside_quotes = !inside_quotes,
                ',' if !inside_quotes => values.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }

        values.push(current);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_matches_comma_split() {
        for line in ["a,b,c", "1,,3", ",", "single", "x, y ,z"] {
            let expected: Vec<String> = line.split(',').map(String::from).collect();
            assert_eq!(RowTokenizer::tokenize(line), expected);
        }
    }

    #[test]
    fn quoted_comma_stays_in_field() {
        assert_eq!(RowTokenizer::tokenize(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn empty_line_yields_one_empty_field() {
        assert_eq!(RowTokenizer::tokenize(""), vec![String::new()]);
    }

    #[test]
    fn doubled_quotes_contribute_nothing() {
        assert_eq!(RowTokenizer::tokenize(r#"say ""hi"",x"#), vec!["say hi", "x"]);
    }

    #[test]
    fn unterminated_quote_swallows_remaining_commas() {
        assert_eq!(RowTokenizer::tokenize(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn trailing_comma_emits_empty_last_field() {
        assert_eq!(RowTokenizer::tokenize("a,b,"), vec!["a", "b", ""]);
    }
}
