use crate::error::LutError;
use crate::types::Token;

/// Number of high-byte characters (0x80-0xFF) a mapping source must supply.
pub const HIGH_CHAR_COUNT: usize = 128;

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// Split a mapping source into tokens on tab, LF and CR.
/// Empty runs are skipped. Fails unless exactly 128 tokens are found.
pub fn parse_tokens(source: &[u8]) -> Result<Vec<Token>, LutError> {
    let tokens: Vec<Token> = source
        .split(|&b| is_delimiter(b))
        .filter_map(|run| Token::new(run.to_vec()))
        .collect();

    tracing::debug!("parsed {} tokens from {} bytes", tokens.len(), source.len());

    if tokens.len() != HIGH_CHAR_COUNT {
        return Err(LutError::Format {
            count: tokens.len(),
            expected: HIGH_CHAR_COUNT,
        });
    }

    for (i, token) in tokens.iter().enumerate() {
        if std::str::from_utf8(token.as_bytes()).is_err() {
            tracing::warn!("token for byte 0x{:02X} is not valid UTF-8", HIGH_CHAR_COUNT + i);
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with(tokens: &[&str], sep: &str) -> Vec<u8> {
        tokens.join(sep).into_bytes()
    }

    #[test]
    fn test_parses_128_tokens_in_order() {
        let names: Vec<String> = (0..128).map(|i| format!("t{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let tokens = parse_tokens(&source_with(&refs, "\t")).unwrap();

        assert_eq!(tokens.len(), 128);
        assert_eq!(tokens[0].as_bytes(), b"t0");
        assert_eq!(tokens[57].as_bytes(), b"t57");
        assert_eq!(tokens[127].as_bytes(), b"t127");
    }

    #[test]
    fn test_mixed_and_repeated_delimiters_produce_no_empty_tokens() {
        let mut src = b"\r\n\t\t".to_vec();
        for i in 0..128 {
            src.push(b'a' + (i % 26) as u8);
            src.extend_from_slice(match i % 3 {
                0 => b"\t".as_slice(),
                1 => b"\r\n".as_slice(),
                _ => b"\n\n\t".as_slice(),
            });
        }
        let tokens = parse_tokens(&src).unwrap();
        assert_eq!(tokens.len(), 128);
        assert!(tokens.iter().all(|t| t.len() == 1));
        assert_eq!(tokens[27].as_bytes(), b"b");
    }

    #[test]
    fn test_space_is_not_a_delimiter() {
        let mut src = b"a b".to_vec();
        for _ in 1..128 {
            src.extend_from_slice(b"\n?");
        }
        let tokens = parse_tokens(&src).unwrap();
        assert_eq!(tokens[0].as_bytes(), b"a b");
    }

    #[test]
    fn test_multibyte_tokens_kept_whole() {
        let mut src = vec![0xC3, 0x84];
        for _ in 1..128 {
            src.extend_from_slice(b"\t?");
        }
        let tokens = parse_tokens(&src).unwrap();
        assert_eq!(tokens[0].as_bytes(), &[0xC3, 0x84]);
        assert_eq!(tokens[1].as_bytes(), b"?");
    }

    #[test]
    fn test_too_few_tokens_is_format_error() {
        let src = vec!["x"; 127].join("\n").into_bytes();
        match parse_tokens(&src) {
            Err(LutError::Format { count, expected }) => {
                assert_eq!(count, 127);
                assert_eq!(expected, 128);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_tokens_is_format_error() {
        let src = vec!["x"; 129].join("\t").into_bytes();
        assert!(matches!(
            parse_tokens(&src),
            Err(LutError::Format { count: 129, .. })
        ));
    }

    #[test]
    fn test_empty_source_is_format_error() {
        assert!(matches!(
            parse_tokens(b"\r\n\t"),
            Err(LutError::Format { count: 0, .. })
        ));
    }
}
