//! Parser for Tesseract's TSV output.
//!
//! Columns: `level page_num block_num par_num line_num word_num left top
//! width height conf text`. Rows above word level carry an empty text column.

use super::OcrWord;
use crate::error::{Error, Result};
use crate::geometry::PixelBox;

const COLUMNS: usize = 12;

/// Parse `tesseract ... tsv` output into words, keeping engine order.
pub fn parse_tsv(input: &str) -> Result<Vec<OcrWord>> {
    let mut words = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with("level\t") {
            continue;
        }

        let fields: Vec<&str> = line.splitn(COLUMNS, '\t').collect();
        if fields.len() < COLUMNS - 1 {
            return Err(Error::Ocr(format!(
                "TSV line {}: expected {} columns, found {}",
                line_no + 1,
                COLUMNS,
                fields.len()
            )));
        }

        let number = |idx: usize| -> Result<f32> {
            fields[idx].trim().parse::<f32>().map_err(|_| {
                Error::Ocr(format!(
                    "TSV line {}: column {} is not a number: '{}'",
                    line_no + 1,
                    idx + 1,
                    fields[idx]
                ))
            })
        };

        let bbox = PixelBox::new(number(6)?, number(7)?, number(8)?, number(9)?);
        let confidence = number(10)?;
        let text = fields.get(11).copied().unwrap_or_default();

        words.push(OcrWord {
            text: text.to_string(),
            bbox,
            confidence,
        });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t1836\t2376\t-1\t
4\t1\t1\t1\t1\t0\t216\t300\t900\t42\t-1\t
5\t1\t1\t1\t1\t1\t216\t300\t150\t42\t96.512\tThe
5\t1\t1\t1\t1\t2\t384\t300\t201\t42\t91.03\tGDPR
5\t1\t1\t1\t1\t3\t603\t301\t330\t41\t88\tGDPR-compliant
";

    #[test]
    fn test_parse_keeps_engine_order() {
        let words = parse_tsv(SAMPLE).unwrap();
        assert_eq!(words.len(), 5);

        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["", "", "The", "GDPR", "GDPR-compliant"]);
    }

    #[test]
    fn test_parse_boxes_and_confidence() {
        let words = parse_tsv(SAMPLE).unwrap();
        let gdpr = &words[3];
        assert_eq!(gdpr.bbox, PixelBox::new(384.0, 300.0, 201.0, 42.0));
        assert!((gdpr.confidence - 91.03).abs() < 1e-4);
        assert_eq!(words[0].confidence, -1.0);
    }

    #[test]
    fn test_parse_missing_text_column() {
        let words = parse_tsv("2\t1\t1\t0\t0\t0\t10\t20\t30\t40\t-1\n").unwrap();
        assert_eq!(words.len(), 1);
        assert!(words[0].text.is_empty());
    }

    #[test]
    fn test_parse_empty_and_header_only() {
        assert!(parse_tsv("").unwrap().is_empty());
        assert!(parse_tsv("level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        let err = parse_tsv("5\t1\t1\t1\t1\t1\tleft\t300\t150\t42\t96\tThe\n").unwrap_err();
        assert!(matches!(err, Error::Ocr(_)));
        assert!(format!("{}", err).contains("line 1"));
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        assert!(parse_tsv("5\t1\t1\n").is_err());
    }

    #[test]
    fn test_parse_keeps_text_verbatim() {
        let input = "5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\t GDPR \n\
                     5\t1\t1\t1\t1\t2\t1\t2\t3\t4\t90\t  \n";
        let words = parse_tsv(input).unwrap();
        assert_eq!(words[0].text, " GDPR ");
        assert_eq!(words[1].text, "  ");
    }

    #[test]
    fn test_parse_handles_crlf() {
        let words = parse_tsv("5\t1\t1\t1\t1\t1\t1\t2\t3\t4\t90\tGDPR\r\n").unwrap();
        assert_eq!(words[0].text, "GDPR");
    }
}
