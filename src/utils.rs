// src/utils.rs

/// Make a person's name safe to use in a file name. Case is kept; anything
/// other than alphanumerics, `-` and `_` becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "resume".to_string()
    } else {
        sanitized
    }
}

/// "<name>_fresher_resume", without extension
pub fn resume_file_stem(person_name: &str) -> String {
    format!("{}_fresher_resume", sanitize_file_name(person_name))
}
