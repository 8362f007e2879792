//! Source comment lookup
//!
//! protoc hands plugins the comments of the source `.proto` file inside
//! `source_code_info`, keyed by the descriptor path of the commented element.

use prost_types::FileDescriptorProto;

/// Field number of `service` in FileDescriptorProto
const FILE_SERVICE_FIELD: i32 = 6;

/// Field number of `method` in ServiceDescriptorProto
const SERVICE_METHOD_FIELD: i32 = 2;

/// Leading comment of the service at `service_index`
pub fn service_comment(file: &FileDescriptorProto, service_index: usize) -> Option<&str> {
    leading_comment(file, &[FILE_SERVICE_FIELD, service_index as i32])
}

/// Leading comment of a method
pub fn method_comment(
    file: &FileDescriptorProto,
    service_index: usize,
    method_index: usize,
) -> Option<&str> {
    leading_comment(
        file,
        &[
            FILE_SERVICE_FIELD,
            service_index as i32,
            SERVICE_METHOD_FIELD,
            method_index as i32,
        ],
    )
}

fn leading_comment<'a>(file: &'a FileDescriptorProto, path: &[i32]) -> Option<&'a str> {
    file.source_code_info
        .as_ref()?
        .location
        .iter()
        .find(|loc| loc.path == path)
        .map(|loc| loc.leading_comments())
        .filter(|comment| !comment.trim().is_empty())
}

/// Render a comment as Javadoc lines, each prefixed with `indent`
pub fn javadoc(comment: &str, indent: &str) -> Vec<String> {
    let mut lines = vec![format!("{}/**", indent)];
    for line in comment.trim_end().lines() {
        let line = escape_javadoc(line.trim_end());
        if line.is_empty() {
            lines.push(format!("{} *", indent));
        } else if line.starts_with(' ') {
            lines.push(format!("{} *{}", indent, line));
        } else {
            lines.push(format!("{} * {}", indent, line));
        }
    }
    lines.push(format!("{} */", indent));
    lines
}

/// Escape text so javac reads it as plain comment prose
///
/// Backslashes would start `\u` escapes, which javac decodes even inside
/// comments; `@` would open block tags; `*/` and `/*` would end or nest the
/// comment; `<`, `>` and `&` are HTML in Javadoc.
fn escape_javadoc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = '\0';

    for c in text.chars() {
        match c {
            '*' if prev == '/' => out.push_str("&#42;"),
            '/' if prev == '*' => out.push_str("&#47;"),
            '@' => out.push_str("&#64;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\\' => out.push_str("&#92;"),
            _ => out.push(c),
        }
        prev = c;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::source_code_info::Location;
    use prost_types::SourceCodeInfo;

    fn file_with(locations: Vec<(Vec<i32>, &str)>) -> FileDescriptorProto {
        FileDescriptorProto {
            source_code_info: Some(SourceCodeInfo {
                location: locations
                    .into_iter()
                    .map(|(path, comment)| Location {
                        path,
                        leading_comments: Some(comment.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_service_and_method_comments() {
        let file = file_with(vec![
            (vec![6, 0], " Makes hats.\n"),
            (vec![6, 0, 2, 1], " Sizes a hat.\n"),
        ]);
        assert_eq!(service_comment(&file, 0), Some(" Makes hats.\n"));
        assert_eq!(method_comment(&file, 0, 1), Some(" Sizes a hat.\n"));
        assert_eq!(method_comment(&file, 0, 0), None);
        assert_eq!(service_comment(&file, 1), None);
    }

    #[test]
    fn test_blank_comment_is_none() {
        let file = file_with(vec![(vec![6, 0], "  \n")]);
        assert_eq!(service_comment(&file, 0), None);
        assert_eq!(service_comment(&FileDescriptorProto::default(), 0), None);
    }

    #[test]
    fn test_javadoc() {
        let lines = javadoc(" Makes hats.\n\n Closes */ early\n", "  ");
        assert_eq!(
            lines,
            vec![
                "  /**",
                "   * Makes hats.",
                "   *",
                "   * Closes *&#47; early",
                "   */",
            ]
        );
    }

    #[test]
    fn test_javadoc_escapes_java_syntax() {
        let lines = javadoc(
            " Reads C:\\users\\hats.\n @deprecated not really\n Opens /* and <b>R&D</b>\n",
            "",
        );
        assert_eq!(
            lines,
            vec![
                "/**",
                " * Reads C:&#92;users&#92;hats.",
                " * &#64;deprecated not really",
                " * Opens /&#42; and &lt;b&gt;R&amp;D&lt;/b&gt;",
                " */",
            ]
        );
        assert!(lines.iter().all(|line| !line.contains("\\u")));
    }
}
