//! Atom 1.0 feed rendering

use super::{SiteMeta, combined, escape_xml};
use crate::schema::{Item, ListingKind};

/// Render an Atom 1.0 document over the given collections
///
/// Entries are date-descending; each carries its keywords as category
/// terms plus a `type:<kind>` category so consumers can tell projects
/// from writing. Dates render as midnight-UTC instants.
#[must_use]
pub fn atom_feed(collections: &[(ListingKind, &[Item])], site: &SiteMeta) -> String {
    let entries = combined(collections);
    let origin = site.origin.trim_end_matches('/');
    let self_url = format!("{origin}/atom.xml");

    let updated = entries
        .first()
        .map_or_else(|| chrono::Utc::now().date_naive(), |e| e.item.date);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str(&format!("  <title>{}</title>\n", escape_xml(&site.title)));
    out.push_str(&format!(
        "  <subtitle>{}</subtitle>\n",
        escape_xml(&site.description)
    ));
    out.push_str(&format!("  <id>{origin}/</id>\n"));
    out.push_str(&format!(
        "  <link href=\"{}\" rel=\"self\" />\n",
        escape_xml(&self_url)
    ));
    out.push_str(&format!("  <link href=\"{origin}/\" />\n"));
    out.push_str(&format!("  <updated>{updated}T00:00:00Z</updated>\n"));
    out.push_str(&format!(
        "  <author><name>{}</name></author>\n",
        escape_xml(&site.author)
    ));

    for entry in &entries {
        let url = entry.url(&site.origin);
        out.push_str("  <entry>\n");
        out.push_str(&format!(
            "    <title>{}</title>\n",
            escape_xml(&entry.item.title)
        ));
        out.push_str(&format!("    <id>{}</id>\n", escape_xml(&url)));
        out.push_str(&format!(
            "    <link href=\"{}\" rel=\"alternate\" />\n",
            escape_xml(&url)
        ));
        out.push_str(&format!(
            "    <updated>{}T00:00:00Z</updated>\n",
            entry.item.date
        ));
        out.push_str(&format!(
            "    <published>{}T00:00:00Z</published>\n",
            entry.item.date
        ));
        out.push_str(&format!(
            "    <summary>{}</summary>\n",
            escape_xml(entry.summary())
        ));
        for keyword in &entry.item.keywords {
            out.push_str(&format!(
                "    <category term=\"{}\" />\n",
                escape_xml(keyword)
            ));
        }
        out.push_str(&format!(
            "    <category term=\"type:{}\" />\n",
            entry.kind
        ));
        out.push_str("  </entry>\n");
    }

    out.push_str("</feed>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    fn site() -> SiteMeta {
        SiteMeta {
            origin: "https://example.org".to_string(),
            title: "Example".to_string(),
            description: "Essays & projects".to_string(),
            author: "A. Author".to_string(),
        }
    }

    #[test]
    fn test_atom_entries_sorted_and_typed() {
        let projects = vec![item("proj", "2023-05-01", &["nlp"])];
        let mut post = item("post", "2024-05-01", &[]);
        post.summary = Some("a <b>bold</b> take".to_string());
        let writing = vec![post];

        let doc = atom_feed(
            &[
                (ListingKind::Projects, projects.as_slice()),
                (ListingKind::Writing, writing.as_slice()),
            ],
            &site(),
        );

        // Newest entry first
        let post_pos = doc.find("https://example.org/writing/post/").unwrap();
        let proj_pos = doc.find("https://example.org/projects/proj/").unwrap();
        assert!(post_pos < proj_pos);

        assert!(doc.contains("<category term=\"nlp\" />"));
        assert!(doc.contains("<category term=\"type:projects\" />"));
        assert!(doc.contains("<category term=\"type:writing\" />"));
        assert!(doc.contains("a &lt;b&gt;bold&lt;/b&gt; take"));
        assert!(doc.contains("<updated>2024-05-01T00:00:00Z</updated>"));
    }

    #[test]
    fn test_atom_escapes_header_fields() {
        let doc = atom_feed(&[], &site());
        assert!(doc.contains("<subtitle>Essays &amp; projects</subtitle>"));
        assert!(doc.contains("<author><name>A. Author</name></author>"));
    }
}
