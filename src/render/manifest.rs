//! Markdown fragments built from records

use crate::data::{PortfolioItem, Skill};
use crate::discovery::Vessel;

const MANIFEST_ROWS: usize = 5;
const BAR_CELLS: usize = 10;

/// Top vessels as a GitHub-flavored table, each linked to its deployment report
pub(crate) fn vessel_table(vessels: &[Vessel]) -> String {
    if vessels.is_empty() {
        return "*[ ! ] No active vessels discovered in public grid.*".to_string();
    }

    let mut table = String::from("| Vessel | Description | Stack | Metrics | Status |\n");
    table.push_str("| :--- | :--- | :--- | :--- | :---: |\n");
    for v in vessels.iter().take(MANIFEST_ROWS) {
        table.push_str(&format!(
            "| **[{name}](./docs/deployments/{name}.md)** | {desc} | `{lang}` | ⭐ {stars} 🍴 {forks} | `{status}` |\n",
            name = v.name,
            desc = cell(&v.desc),
            lang = v.lang,
            stars = v.stars,
            forks = v.forks,
            status = v.status.label(),
        ));
    }
    table
}

/// One text progress bar per skill, ten cells wide. Skills that came from a
/// category dict are grouped under a `####` heading per category.
pub(crate) fn skill_bars(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "*[ ! ] Skill matrix offline.*".to_string();
    }

    let mut out = String::new();
    let mut group: Option<&str> = None;
    for s in skills {
        let category = s.category.as_deref();
        if category != group {
            if group.is_some() {
                out.push('\n');
            }
            if let Some(name) = category {
                out.push_str(&format!("#### {}\n", name.to_uppercase()));
            }
            group = category;
        }

        let filled = ((s.score.clamp(0, 100) + 5) / 10) as usize;
        out.push_str(&format!(
            "- {} `{}{}`\n",
            s.name,
            "█".repeat(filled),
            "░".repeat(BAR_CELLS - filled)
        ));
    }
    if group.is_some() {
        out.push('\n');
    }
    out
}

/// Portfolio rows, one per shipped project
pub(crate) fn portfolio_table(items: &[PortfolioItem]) -> String {
    items
        .iter()
        .map(|p| {
            format!(
                "| **[{}]({})** | `SHIP` | System | {} | ⭐{} |",
                p.name,
                p.link,
                cell(&p.description),
                p.stars
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pipes and newlines would break the surrounding table row
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::collect_vessels;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn vessels(n: usize) -> Vec<Vessel> {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let repos: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "name": format!("vessel-{i}"),
                    "description": "Fast | small",
                    "language": "Rust",
                    "stargazers_count": 3,
                    "forks_count": 1,
                    "updated_at": "2026-05-01T00:00:00Z",
                })
            })
            .collect();
        collect_vessels(&repos, now)
    }

    #[test]
    fn empty_manifest_placeholder() {
        assert_eq!(
            vessel_table(&[]),
            "*[ ! ] No active vessels discovered in public grid.*"
        );
    }

    #[test]
    fn manifest_keeps_top_five() {
        let table = vessel_table(&vessels(7));
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[0], "| Vessel | Description | Stack | Metrics | Status |");
        assert_eq!(
            lines[2],
            "| **[vessel-0](./docs/deployments/vessel-0.md)** | Fast \\| small | `Rust` | ⭐ 3 🍴 1 | `ACTIVE` |"
        );
        assert!(!table.contains("vessel-5"));
    }

    #[test]
    fn skill_bars_scale_to_ten_cells() {
        let bars = skill_bars(&[Skill::new("Rust", 85), Skill::new("Go", 0)]);
        assert_eq!(bars, "- Rust `█████████░`\n- Go `░░░░░░░░░░`\n");
    }

    #[test]
    fn skill_bars_group_by_category() {
        let skills = Skill::normalize(&json!({
            "languages": [{"name": "Rust", "level": 9}, {"name": "Go", "level": 7}],
            "infra": [{"name": "Nix", "level": 5}]
        }));
        assert_eq!(
            skill_bars(&skills),
            "#### LANGUAGES\n- Rust `█████████░`\n- Go `███████░░░`\n\n\
             #### INFRA\n- Nix `█████░░░░░`\n\n"
        );
    }

    #[test]
    fn portfolio_rows() {
        let items = vec![PortfolioItem {
            name: "surface".into(),
            description: "Profile engine".into(),
            link: "https://example.com".into(),
            stars: 12,
        }];
        assert_eq!(
            portfolio_table(&items),
            "| **[surface](https://example.com)** | `SHIP` | System | Profile engine | ⭐12 |"
        );
        assert!(portfolio_table(&[]).is_empty());
    }
}
