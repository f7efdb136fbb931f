/// Join a reference onto a base location.
///
/// The base is normalised to end with exactly one `/` and a single leading `/` is dropped
/// from the reference, so `("http://example.com", "/css/a.css")` and
/// `("http://example.com/", "css/a.css")` produce the same string.
pub fn join_reference(base: &str, reference: &str) -> String {
    let reference = reference.strip_prefix('/').unwrap_or(reference);
    let mut joined = String::with_capacity(base.len() + reference.len() + 1);
    joined.push_str(base.trim_end_matches('/'));
    joined.push('/');
    joined.push_str(reference);
    joined
}

/// Directory portion of a resolved path: everything up to and including the last `/`.
///
/// Paths without any separator have no directory and yield an empty string.
pub fn directory_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..=index],
        None => "",
    }
}
