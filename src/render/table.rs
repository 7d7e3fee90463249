//! Plain output for the `classify` and `lists` commands

use anyhow::{Context, Result};
use std::io::Write;

use super::MapSummary;
use crate::classify::CountryRecord;
use crate::iso::by_alpha3;

/// One `name<TAB>iso<TAB>category` line per record
pub fn write_tsv(records: &[CountryRecord], out: &mut impl Write) -> Result<()> {
    for record in records {
        writeln!(out, "{}\t{}\t{}", record.name, record.iso_code, record.category.key())
            .context("Failed to write table")?;
    }
    Ok(())
}

/// `query<TAB>iso<TAB>official name<TAB>category` for the `lookup` command
pub fn write_lookup(query: &str, record: &CountryRecord, out: &mut impl Write) -> Result<()> {
    let official = by_alpha3(&record.iso_code)
        .map(|c| c.name)
        .unwrap_or(record.name.as_str());
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        query,
        record.iso_code,
        official,
        record.category.key()
    )
    .context("Failed to write lookup")?;
    Ok(())
}

pub fn write_json(records: &[CountryRecord], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

/// Legend counts followed by the sorted country lists
pub fn write_lists(summary: &MapSummary, out: &mut impl Write) -> Result<()> {
    if let Some(notice) = &summary.notice {
        writeln!(out, "! {}\n", notice)?;
    }

    for entry in &summary.legend {
        match entry.listed {
            Some(listed) => writeln!(
                out,
                "{:<16} {:>4} countries {:>6} regions",
                entry.category.label(),
                listed,
                entry.regions
            )?,
            None => writeln!(
                out,
                "{:<16} {:>4} {:>16} regions",
                entry.category.label(),
                "",
                entry.regions
            )?,
        }
    }

    for (category, names) in &summary.lists {
        writeln!(out, "\n{} ({}):", category.label(), names.len())?;
        writeln!(out, "  {}", names.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::VisaCategory;

    #[test]
    fn test_write_tsv() {
        let records = vec![CountryRecord {
            name: "Sri Lanka".into(),
            iso_code: "LKA".into(),
            category: VisaCategory::VisaFree,
        }];
        let mut buf = Vec::new();
        write_tsv(&records, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Sri Lanka\tLKA\tvisa_free\n");
    }

    #[test]
    fn test_lookup_matches_tsv_category() {
        let record = CountryRecord {
            name: "Vietnam".into(),
            iso_code: "VNM".into(),
            category: VisaCategory::EVisa,
        };
        let mut lookup = Vec::new();
        write_lookup("vietnam", &record, &mut lookup).unwrap();
        assert_eq!(
            String::from_utf8(lookup).unwrap(),
            "vietnam\tVNM\tViet Nam\te_visa\n"
        );

        let mut tsv = Vec::new();
        write_tsv(std::slice::from_ref(&record), &mut tsv).unwrap();
        assert!(String::from_utf8(tsv).unwrap().ends_with("\te_visa\n"));
    }

    #[test]
    fn test_write_lists_legend() {
        use crate::classify::Precedence;
        use crate::dataset::{ListSource, LoadedLists, VisaLists};

        let loaded = LoadedLists {
            lists: VisaLists {
                visa_free: vec!["Singapore".into(), "Atlantis".into()],
                visa_on_arrival: vec![],
                e_visa: vec![],
            },
            source: ListSource::Embedded,
            error: None,
        };
        let records = vec![CountryRecord {
            name: "Singapore".into(),
            iso_code: "SGP".into(),
            category: VisaCategory::VisaFree,
        }];
        let summary = MapSummary::build(&records, &loaded, &Precedence::default());

        let mut buf = Vec::new();
        write_lists(&summary, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Visa Free"));
        assert!(first.contains("2 countries"));
        assert!(first.contains("1 regions"));
        let required = text.lines().nth(3).unwrap();
        assert!(required.starts_with("Visa Required"));
        assert!(!required.contains("countries"));
    }

    #[test]
    fn test_write_json() {
        let records = vec![CountryRecord {
            name: "Nepal".into(),
            iso_code: "NPL".into(),
            category: VisaCategory::VisaOnArrival,
        }];
        let mut buf = Vec::new();
        write_json(&records, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["iso_code"], "NPL");
        assert_eq!(parsed[0]["category"], "visa_on_arrival");
    }
}
