/// Domain of a canonical command token: everything before the first `:`.
///
/// `apps:create` resolves to `apps`, `apps` to itself and `a:b:c` to `a`.
pub fn domain_of(token: &str) -> &str {
    token.split_once(':').map_or(token, |(domain, _)| domain)
}
