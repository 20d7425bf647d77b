//! RSS 2.0 feed rendering

use super::{SiteMeta, combined, escape_xml};
use crate::schema::{Item, ListingKind};

/// Render an RSS 2.0 document over the given collections
///
/// Same entry shape as the Atom feed: date-descending items, keyword
/// categories plus a `type:<kind>` category, escaped fields. Dates use
/// the RFC 822 format RSS consumers expect.
#[must_use]
pub fn rss_feed(collections: &[(ListingKind, &[Item])], site: &SiteMeta) -> String {
    let entries = combined(collections);
    let origin = site.origin.trim_end_matches('/');

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<rss version=\"2.0\">\n");
    out.push_str("  <channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_xml(&site.title)));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&site.description)
    ));
    out.push_str(&format!("    <link>{origin}/</link>\n"));
    out.push_str("    <language>en</language>\n");

    for entry in &entries {
        let url = entry.url(&site.origin);
        out.push_str("    <item>\n");
        out.push_str(&format!(
            "      <title>{}</title>\n",
            escape_xml(&entry.item.title)
        ));
        out.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(entry.summary())
        ));
        out.push_str(&format!("      <link>{}</link>\n", escape_xml(&url)));
        out.push_str(&format!("      <guid>{}</guid>\n", escape_xml(&url)));
        out.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            entry.item.date.format("%a, %d %b %Y 00:00:00 +0000")
        ));
        for keyword in &entry.item.keywords {
            out.push_str(&format!(
                "      <category>{}</category>\n",
                escape_xml(keyword)
            ));
        }
        out.push_str(&format!("      <category>type:{}</category>\n", entry.kind));
        out.push_str("    </item>\n");
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_rss_channel_and_items() {
        let mut post = item("post", "2024-05-01", &["ml"]);
        post.summary = Some("summary".to_string());
        let writing = vec![post];

        let site = SiteMeta {
            origin: "https://example.org".to_string(),
            title: "Example".to_string(),
            description: "feed".to_string(),
            author: String::new(),
        };

        let doc = rss_feed(&[(ListingKind::Writing, writing.as_slice())], &site);

        assert!(doc.contains("<language>en</language>"));
        assert!(doc.contains("<link>https://example.org/writing/post/</link>"));
        assert!(doc.contains("<pubDate>Wed, 01 May 2024 00:00:00 +0000</pubDate>"));
        assert!(doc.contains("<category>ml</category>"));
        assert!(doc.contains("<category>type:writing</category>"));
    }
}
