//! Standalone HTML page with a Plotly.js choropleth

use anyhow::{Context, Result};
use askama::Template;
use serde_json::{json, Value};

use super::MapSummary;
use crate::classify::VisaCategory;
use crate::dataset::SOURCE_NOTE;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const DISCLAIMER: &str = "This data is for demonstration purposes only. \
    Always verify visa requirements with official sources before traveling.";

/// Plotly figure: one choropleth trace per category so the legend lists them
pub fn figure(summary: &MapSummary) -> Value {
    let traces: Vec<Value> = VisaCategory::ALL
        .into_iter()
        .filter(|&category| summary.locations_in(category).next().is_some())
        .map(|category| {
            let locations: Vec<&str> = summary
                .locations_in(category)
                .map(|l| l.iso_code.as_str())
                .collect();
            let names: Vec<&str> = summary.locations_in(category).map(|l| l.display_name()).collect();
            let z = vec![1; locations.len()];
            let color = category.color();

            json!({
                "type": "choropleth",
                "name": category.label(),
                "locationmode": "ISO-3",
                "locations": locations,
                "z": z,
                "hovertext": names,
                "hovertemplate": format!("<b>%{{hovertext}}</b><br>{}<extra></extra>", category.label()),
                "colorscale": [[0, color], [1, color]],
                "showscale": false,
                "showlegend": true,
                "marker": { "line": { "color": "Black", "width": 0.5 } },
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "height": 600,
            "margin": { "r": 0, "t": 0, "l": 0, "b": 0 },
            "legend": { "title": { "text": "Visa Status" } },
            "geo": {
                "projection": { "type": "natural earth" },
                "showcoastlines": true,
                "coastlinecolor": "Black",
                "showland": true,
                "landcolor": "LightGray",
                "showocean": true,
                "oceancolor": "LightBlue",
                "showlakes": true,
                "lakecolor": "LightBlue",
                "showcountries": true,
                "countrycolor": "Black",
            },
        },
        "config": { "responsive": true },
    })
}

/// Legend block as shown on the page
pub struct LegendBlock {
    pub color: &'static str,
    pub marker: &'static str,
    pub caption: String,
    pub regions: usize,
}

/// One collapsible country list
pub struct ListSection {
    pub heading: &'static str,
    pub names: String,
}

#[derive(Template)]
#[template(path = "map.html")]
pub struct MapPageTemplate<'a> {
    pub title: &'a str,
    pub summary: &'a MapSummary,
    pub legend: Vec<LegendBlock>,
    pub lists: Vec<ListSection>,
    pub figure_json: String,
    pub plotly_src: &'a str,
    pub disclaimer: &'a str,
    pub source_note: &'a str,
}

impl<'a> MapPageTemplate<'a> {
    pub fn new(summary: &'a MapSummary) -> Self {
        let legend = summary
            .legend
            .iter()
            .map(|entry| LegendBlock {
                color: entry.category.color(),
                marker: legend_marker(entry.category),
                caption: entry.caption(),
                regions: entry.regions,
            })
            .collect();

        let lists = summary
            .lists
            .iter()
            .map(|(category, names)| ListSection {
                heading: list_heading(*category),
                names: names.join(", "),
            })
            .collect();

        Self {
            title: "Visa-Free Travel Map",
            summary,
            legend,
            lists,
            figure_json: script_json(&figure(summary)),
            plotly_src: PLOTLY_CDN,
            disclaimer: DISCLAIMER,
            source_note: SOURCE_NOTE,
        }
    }
}

/// Render the full page
pub fn render_html(summary: &MapSummary) -> Result<String> {
    MapPageTemplate::new(summary)
        .render()
        .context("Failed to render map page")
}

fn legend_marker(category: VisaCategory) -> &'static str {
    match category {
        VisaCategory::VisaFree => "\u{1F7E2}",
        VisaCategory::VisaOnArrival => "\u{1F7E0}",
        VisaCategory::EVisa => "\u{1F535}",
        VisaCategory::VisaRequired => "\u{1F534}",
    }
}

fn list_heading(category: VisaCategory) -> &'static str {
    match category {
        VisaCategory::VisaFree => "Visa-Free",
        other => other.label(),
    }
}

/// JSON safe to inline inside a `<script>` element
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{CountryRecord, Precedence};
    use crate::dataset::{ListSource, LoadedLists, VisaLists};

    fn summary(notice: Option<String>) -> MapSummary {
        let records = vec![
            CountryRecord {
                name: "Singapore".into(),
                iso_code: "SGP".into(),
                category: VisaCategory::VisaFree,
            },
            CountryRecord {
                name: "Côte d'Ivoire".into(),
                iso_code: "CIV".into(),
                category: VisaCategory::EVisa,
            },
        ];
        let loaded = LoadedLists {
            lists: VisaLists {
                visa_free: vec!["Singapore".into()],
                visa_on_arrival: vec![],
                e_visa: vec!["Côte d'Ivoire".into()],
            },
            source: ListSource::Embedded,
            error: notice,
        };
        MapSummary::build(&records, &loaded, &Precedence::default())
    }

    #[test]
    fn test_figure_traces() {
        let fig = figure(&summary(None));
        let traces = fig["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Visa Free");
        assert_eq!(traces[0]["locations"][0], "SGP");
        assert_eq!(traces[0]["colorscale"][0][1], "#00CC96");
        assert_eq!(traces[1]["name"], "e-Visa");
        assert_eq!(fig["layout"]["geo"]["projection"]["type"], "natural earth");
    }

    #[test]
    fn test_page_contents() {
        let page = render_html(&summary(None)).unwrap();
        assert!(page.contains("<title>Visa-Free Travel Map</title>"));
        assert!(page.contains("Countries Sri Lankans can visit without a visa"));
        assert!(page.contains("Visa Free (1 countries)"));
        assert!(page.contains("Visa on Arrival (0 countries)"));
        assert!(page.contains("Visa Required<small>"));
        assert!(!page.contains("Visa Required ("));
        assert!(page.contains("<h3>e-Visa Countries</h3>"));
        assert!(page.contains("Plotly.newPlot"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_page_shows_notice() {
        let page = render_html(&summary(Some("bad <cache>".into()))).unwrap();
        assert!(page.contains("<div class=\"error\">bad &lt;cache&gt;</div>"));
        assert!(!page.contains("bad <cache>"));
    }

    #[test]
    fn test_list_names_are_escaped() {
        let page = render_html(&summary(None)).unwrap();
        let list = page
            .lines()
            .find(|line| line.starts_with("<p>Côte d"))
            .expect("e-Visa list rendered");
        assert!(!list.contains('\''));
    }

    #[test]
    fn test_figure_is_embedded_raw() {
        let page = render_html(&summary(None)).unwrap();
        assert!(page.contains("const figure = {\"config\""));
        assert!(page.contains("\"locationmode\":\"ISO-3\""));
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let value = json!({ "name": "</script>" });
        assert!(!script_json(&value).contains("</script>"));
    }
}
