use serde::Serialize;

use crate::routes::Route;

/// Canonical site origin for absolute sitemap URLs.
pub const BASE_URL: &str = "https://gariban.space";

/// Expected change cadence of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One sitemap record.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Sitemap records for every route: the project gallery changes weekly
/// and ranks just under the home page, everything else monthly.
pub fn sitemap_entries() -> Vec<SitemapEntry> {
    Route::ALL
        .iter()
        .map(|route| {
            let (change_frequency, priority) = match route {
                Route::Home => (ChangeFrequency::Monthly, 1.0),
                Route::About | Route::Skills | Route::Experience => {
                    (ChangeFrequency::Monthly, 0.8)
                }
                Route::Projects => (ChangeFrequency::Weekly, 0.9),
                Route::Contact => (ChangeFrequency::Monthly, 0.7),
            };
            SitemapEntry {
                url: absolute_url(*route),
                change_frequency,
                priority,
            }
        })
        .collect()
}

/// The home page is the bare origin, without a trailing slash.
fn absolute_url(route: Route) -> String {
    match route {
        Route::Home => BASE_URL.to_string(),
        other => format!("{}{}", BASE_URL, other.path()),
    }
}

/// Render entries as a sitemaps.org urlset document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.url));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_route_in_order() {
        let entries = sitemap_entries();
        assert_eq!(entries.len(), Route::ALL.len());
        assert_eq!(entries[0].url, "https://gariban.space");
        assert_eq!(entries[1].url, "https://gariban.space/hakkimda");
        assert_eq!(entries[5].url, "https://gariban.space/iletisim");
    }

    #[test]
    fn priorities_match_site_weights() {
        let entries = sitemap_entries();
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[4].priority, 0.9);
        assert_eq!(entries[4].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(entries[5].priority, 0.7);
    }

    #[test]
    fn xml_contains_urlset_and_locs() {
        let xml = to_xml(&sitemap_entries());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://gariban.space/projelerim</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn entries_serialize_with_lowercase_frequency() {
        let entries = sitemap_entries();
        let value = serde_json::to_value(&entries[4]).unwrap();
        assert_eq!(value["change_frequency"], "weekly");
        assert_eq!(value["url"], "https://gariban.space/projelerim");
    }
}
