//! `{{TOKEN}}` substitution

use super::context::HydrationContext;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{KEY}}` that has a context entry, in one left-to-right pass.
///
/// Substituted values are never rescanned, so a value that itself contains
/// `{{...}}` lands in the output verbatim. Keys without an entry, and
/// unterminated openers, are left as literal text.
pub(crate) fn substitute(template: &str, ctx: &HydrationContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        let value = after
            .find(CLOSE)
            .and_then(|end| ctx.get(&after[..end]).map(|v| (v, end)));
        match value {
            Some((v, end)) => {
                out.push_str(v);
                rest = &after[end + CLOSE.len()..];
            }
            None => {
                // Only the first brace is literal; the next one may open a real token
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// First `limit` characters of a rendered document, marked when cut short
pub(crate) fn preview(doc: &str, limit: usize) -> String {
    match doc.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}\n... [truncated]", &doc[..idx]),
        None => doc.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> HydrationContext {
        let mut ctx = HydrationContext::default();
        for (k, v) in pairs {
            ctx.insert(*k, *v);
        }
        ctx
    }

    #[test]
    fn replaces_known_tokens() {
        let c = ctx(&[("GIT_SHA", "abc1234"), ("GEN_VERSION", "v10")]);
        assert_eq!(
            substitute("sha={{GIT_SHA}} ver={{GEN_VERSION}} again={{GIT_SHA}}", &c),
            "sha=abc1234 ver=v10 again=abc1234"
        );
    }

    #[test]
    fn unknown_tokens_stay_literal() {
        let c = ctx(&[("A", "1")]);
        assert_eq!(substitute("{{A}} {{NOPE}} {{A}}", &c), "1 {{NOPE}} 1");
    }

    #[test]
    fn values_are_not_reexpanded() {
        let c = ctx(&[("A", "{{B}}"), ("B", "boom")]);
        assert_eq!(substitute("{{A}}", &c), "{{B}}");
    }

    #[test]
    fn unterminated_and_nested_braces() {
        let c = ctx(&[("A", "1")]);
        assert_eq!(substitute("x {{A", &c), "x {{A");
        assert_eq!(substitute("{{{A}}", &c), "{1");
        assert_eq!(substitute("{{{{A}}", &c), "{{1");
        assert_eq!(substitute("", &c), "");
    }

    #[test]
    fn token_after_stray_brace_is_replaced() {
        let c = ctx(&[("GIT_SHA", "abc1234")]);
        assert_eq!(
            substitute("```\nfn main() {{{GIT_SHA}}\n```", &c),
            "```\nfn main() {abc1234\n```"
        );
        assert_eq!(substitute("{{NOPE {{GIT_SHA}}", &c), "{{NOPE abc1234");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("◈◈◈◈", 2), "◈◈\n... [truncated]");
        assert_eq!(preview("abc", 3), "abc");
    }
}
