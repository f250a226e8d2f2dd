//! Console listing of publications.

use std::io::{self, Write};

use crate::publications::Publication;

/// Writes a labeled publication list.
///
/// Output is a blank line, `"{label} ({count})"`, one `"* {name} ({gid})"`
/// line per publication, and a trailing blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::printer::print_publications;
/// use shopify_publisher::publications::Publication;
///
/// let mut out = Vec::new();
/// let list = [Publication {
///     gid: "gid://shopify/Publication/1".to_string(),
///     name: "Online Store".to_string(),
/// }];
///
/// print_publications(&mut out, "All publications", &list).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\nAll publications (1)\n* Online Store (gid://shopify/Publication/1)\n\n"
/// );
/// ```
pub fn print_publications<W>(out: &mut W, label: &str, publications: &[Publication]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out)?;
    writeln!(out, "{label} ({})", publications.len())?;
    for publication in publications {
        writeln!(out, "* {} ({})", publication.name, publication.gid)?;
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_prints_header_only() {
        let mut out = Vec::new();

        print_publications(&mut out, "Product publications", &[]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nProduct publications (0)\n\n"
        );
    }

    #[test]
    fn test_entries_keep_order() {
        let list = vec![
            Publication {
                gid: "gid://shopify/Publication/2".to_string(),
                name: "Point of Sale".to_string(),
            },
            Publication {
                gid: "gid://shopify/Publication/1".to_string(),
                name: "Online Store".to_string(),
            },
        ];
        let mut out = Vec::new();

        print_publications(&mut out, "All publications", &list).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                "All publications (2)",
                "* Point of Sale (gid://shopify/Publication/2)",
                "* Online Store (gid://shopify/Publication/1)",
                "",
            ]
        );
    }
}
