//! ISO 3166-1 country reference list

/// One entry of the ISO 3166-1 list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
}

const fn c(name: &'static str, alpha2: &'static str, alpha3: &'static str) -> Country {
    Country { name, alpha2, alpha3 }
}

/// Officially assigned codes, ordered by English short name
pub static COUNTRIES: &[Country] = &[
    c("Afghanistan", "AF", "AFG"),
    c("Åland Islands", "AX", "ALA"),
    c("Albania", "AL", "ALB"),
    c("Algeria", "DZ", "DZA"),
    c("American Samoa", "AS", "ASM"),
    c("Andorra", "AD", "AND"),
    c("Angola", "AO", "AGO"),
    c("Anguilla", "AI", "AIA"),
    c("Antarctica", "AQ", "ATA"),
    c("Antigua and Barbuda", "AG", "ATG"),
    c("Argentina", "AR", "ARG"),
    c("Armenia", "AM", "ARM"),
    c("Aruba", "AW", "ABW"),
    c("Australia", "AU", "AUS"),
    c("Austria", "AT", "AUT"),
    c("Azerbaijan", "AZ", "AZE"),
    c("Bahamas", "BS", "BHS"),
    c("Bahrain", "BH", "BHR"),
    c("Bangladesh", "BD", "BGD"),
    c("Barbados", "BB", "BRB"),
    c("Belarus", "BY", "BLR"),
    c("Belgium", "BE", "BEL"),
    c("Belize", "BZ", "BLZ"),
    c("Benin", "BJ", "BEN"),
    c("Bermuda", "BM", "BMU"),
    c("Bhutan", "BT", "BTN"),
    c("Bolivia, Plurinational State of", "BO", "BOL"),
    c("Bonaire, Sint Eustatius and Saba", "BQ", "BES"),
    c("Bosnia and Herzegovina", "BA", "BIH"),
    c("Botswana", "BW", "BWA"),
    c("Bouvet Island", "BV", "BVT"),
    c("Brazil", "BR", "BRA"),
    c("British Indian Ocean Territory", "IO", "IOT"),
    c("Brunei Darussalam", "BN", "BRN"),
    c("Bulgaria", "BG", "BGR"),
    c("Burkina Faso", "BF", "BFA"),
    c("Burundi", "BI", "BDI"),
    c("Cabo Verde", "CV", "CPV"),
    c("Cambodia", "KH", "KHM"),
    c("Cameroon", "CM", "CMR"),
    c("Canada", "CA", "CAN"),
    c("Cayman Islands", "KY", "CYM"),
    c("Central African Republic", "CF", "CAF"),
    c("Chad", "TD", "TCD"),
    c("Chile", "CL", "CHL"),
    c("China", "CN", "CHN"),
    c("Christmas Island", "CX", "CXR"),
    c("Cocos (Keeling) Islands", "CC", "CCK"),
    c("Colombia", "CO", "COL"),
    c("Comoros", "KM", "COM"),
    c("Congo", "CG", "COG"),
    c("Congo, Democratic Republic of the", "CD", "COD"),
    c("Cook Islands", "CK", "COK"),
    c("Costa Rica", "CR", "CRI"),
    c("Côte d'Ivoire", "CI", "CIV"),
    c("Croatia", "HR", "HRV"),
    c("Cuba", "CU", "CUB"),
    c("Curaçao", "CW", "CUW"),
    c("Cyprus", "CY", "CYP"),
    c("Czechia", "CZ", "CZE"),
    c("Denmark", "DK", "DNK"),
    c("Djibouti", "DJ", "DJI"),
    c("Dominica", "DM", "DMA"),
    c("Dominican Republic", "DO", "DOM"),
    c("Ecuador", "EC", "ECU"),
    c("Egypt", "EG", "EGY"),
    c("El Salvador", "SV", "SLV"),
    c("Equatorial Guinea", "GQ", "GNQ"),
    c("Eritrea", "ER", "ERI"),
    c("Estonia", "EE", "EST"),
    c("Eswatini", "SZ", "SWZ"),
    c("Ethiopia", "ET", "ETH"),
    c("Falkland Islands (Malvinas)", "FK", "FLK"),
    c("Faroe Islands", "FO", "FRO"),
    c("Fiji", "FJ", "FJI"),
    c("Finland", "FI", "FIN"),
    c("France", "FR", "FRA"),
    c("French Guiana", "GF", "GUF"),
    c("French Polynesia", "PF", "PYF"),
    c("French Southern Territories", "TF", "ATF"),
    c("Gabon", "GA", "GAB"),
    c("Gambia", "GM", "GMB"),
    c("Georgia", "GE", "GEO"),
    c("Germany", "DE", "DEU"),
    c("Ghana", "GH", "GHA"),
    c("Gibraltar", "GI", "GIB"),
    c("Greece", "GR", "GRC"),
    c("Greenland", "GL", "GRL"),
    c("Grenada", "GD", "GRD"),
    c("Guadeloupe", "GP", "GLP"),
    c("Guam", "GU", "GUM"),
    c("Guatemala", "GT", "GTM"),
    c("Guernsey", "GG", "GGY"),
    c("Guinea", "GN", "GIN"),
    c("Guinea-Bissau", "GW", "GNB"),
    c("Guyana", "GY", "GUY"),
    c("Haiti", "HT", "HTI"),
    c("Heard Island and McDonald Islands", "HM", "HMD"),
    c("Holy See", "VA", "VAT"),
    c("Honduras", "HN", "HND"),
    c("Hong Kong", "HK", "HKG"),
    c("Hungary", "HU", "HUN"),
    c("Iceland", "IS", "ISL"),
    c("India", "IN", "IND"),
    c("Indonesia", "ID", "IDN"),
    c("Iran, Islamic Republic of", "IR", "IRN"),
    c("Iraq", "IQ", "IRQ"),
    c("Ireland", "IE", "IRL"),
    c("Isle of Man", "IM", "IMN"),
    c("Israel", "IL", "ISR"),
    c("Italy", "IT", "ITA"),
    c("Jamaica", "JM", "JAM"),
    c("Japan", "JP", "JPN"),
    c("Jersey", "JE", "JEY"),
    c("Jordan", "JO", "JOR"),
    c("Kazakhstan", "KZ", "KAZ"),
    c("Kenya", "KE", "KEN"),
    c("Kiribati", "KI", "KIR"),
    c("Korea, Democratic People's Republic of", "KP", "PRK"),
    c("Korea, Republic of", "KR", "KOR"),
    c("Kuwait", "KW", "KWT"),
    c("Kyrgyzstan", "KG", "KGZ"),
    c("Lao People's Democratic Republic", "LA", "LAO"),
    c("Latvia", "LV", "LVA"),
    c("Lebanon", "LB", "LBN"),
    c("Lesotho", "LS", "LSO"),
    c("Liberia", "LR", "LBR"),
    c("Libya", "LY", "LBY"),
    c("Liechtenstein", "LI", "LIE"),
    c("Lithuania", "LT", "LTU"),
    c("Luxembourg", "LU", "LUX"),
    c("Macao", "MO", "MAC"),
    c("North Macedonia", "MK", "MKD"),
    c("Madagascar", "MG", "MDG"),
    c("Malawi", "MW", "MWI"),
    c("Malaysia", "MY", "MYS"),
    c("Maldives", "MV", "MDV"),
    c("Mali", "ML", "MLI"),
    c("Malta", "MT", "MLT"),
    c("Marshall Islands", "MH", "MHL"),
    c("Martinique", "MQ", "MTQ"),
    c("Mauritania", "MR", "MRT"),
    c("Mauritius", "MU", "MUS"),
    c("Mayotte", "YT", "MYT"),
    c("Mexico", "MX", "MEX"),
    c("Micronesia, Federated States of", "FM", "FSM"),
    c("Moldova, Republic of", "MD", "MDA"),
    c("Monaco", "MC", "MCO"),
    c("Mongolia", "MN", "MNG"),
    c("Montenegro", "ME", "MNE"),
    c("Montserrat", "MS", "MSR"),
    c("Morocco", "MA", "MAR"),
    c("Mozambique", "MZ", "MOZ"),
    c("Myanmar", "MM", "MMR"),
    c("Namibia", "NA", "NAM"),
    c("Nauru", "NR", "NRU"),
    c("Nepal", "NP", "NPL"),
    c("Netherlands", "NL", "NLD"),
    c("New Caledonia", "NC", "NCL"),
    c("New Zealand", "NZ", "NZL"),
    c("Nicaragua", "NI", "NIC"),
    c("Niger", "NE", "NER"),
    c("Nigeria", "NG", "NGA"),
    c("Niue", "NU", "NIU"),
    c("Norfolk Island", "NF", "NFK"),
    c("Northern Mariana Islands", "MP", "MNP"),
    c("Norway", "NO", "NOR"),
    c("Oman", "OM", "OMN"),
    c("Pakistan", "PK", "PAK"),
    c("Palau", "PW", "PLW"),
    c("Palestine, State of", "PS", "PSE"),
    c("Panama", "PA", "PAN"),
    c("Papua New Guinea", "PG", "PNG"),
    c("Paraguay", "PY", "PRY"),
    c("Peru", "PE", "PER"),
    c("Philippines", "PH", "PHL"),
    c("Pitcairn", "PN", "PCN"),
    c("Poland", "PL", "POL"),
    c("Portugal", "PT", "PRT"),
    c("Puerto Rico", "PR", "PRI"),
    c("Qatar", "QA", "QAT"),
    c("Réunion", "RE", "REU"),
    c("Romania", "RO", "ROU"),
    c("Russian Federation", "RU", "RUS"),
    c("Rwanda", "RW", "RWA"),
    c("Saint Barthélemy", "BL", "BLM"),
    c("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN"),
    c("Saint Kitts and Nevis", "KN", "KNA"),
    c("Saint Lucia", "LC", "LCA"),
    c("Saint Martin (French part)", "MF", "MAF"),
    c("Saint Pierre and Miquelon", "PM", "SPM"),
    c("Saint Vincent and the Grenadines", "VC", "VCT"),
    c("Samoa", "WS", "WSM"),
    c("San Marino", "SM", "SMR"),
    c("Sao Tome and Principe", "ST", "STP"),
    c("Saudi Arabia", "SA", "SAU"),
    c("Senegal", "SN", "SEN"),
    c("Serbia", "RS", "SRB"),
    c("Seychelles", "SC", "SYC"),
    c("Sierra Leone", "SL", "SLE"),
    c("Singapore", "SG", "SGP"),
    c("Sint Maarten (Dutch part)", "SX", "SXM"),
    c("Slovakia", "SK", "SVK"),
    c("Slovenia", "SI", "SVN"),
    c("Solomon Islands", "SB", "SLB"),
    c("Somalia", "SO", "SOM"),
    c("South Africa", "ZA", "ZAF"),
    c("South Georgia and the South Sandwich Islands", "GS", "SGS"),
    c("South Sudan", "SS", "SSD"),
    c("Spain", "ES", "ESP"),
    c("Sri Lanka", "LK", "LKA"),
    c("Sudan", "SD", "SDN"),
    c("Suriname", "SR", "SUR"),
    c("Svalbard and Jan Mayen", "SJ", "SJM"),
    c("Sweden", "SE", "SWE"),
    c("Switzerland", "CH", "CHE"),
    c("Syrian Arab Republic", "SY", "SYR"),
    c("Taiwan, Province of China", "TW", "TWN"),
    c("Tajikistan", "TJ", "TJK"),
    c("Tanzania, United Republic of", "TZ", "TZA"),
    c("Thailand", "TH", "THA"),
    c("Timor-Leste", "TL", "TLS"),
    c("Togo", "TG", "TGO"),
    c("Tokelau", "TK", "TKL"),
    c("Tonga", "TO", "TON"),
    c("Trinidad and Tobago", "TT", "TTO"),
    c("Tunisia", "TN", "TUN"),
    c("Türkiye", "TR", "TUR"),
    c("Turkmenistan", "TM", "TKM"),
    c("Turks and Caicos Islands", "TC", "TCA"),
    c("Tuvalu", "TV", "TUV"),
    c("Uganda", "UG", "UGA"),
    c("Ukraine", "UA", "UKR"),
    c("United Arab Emirates", "AE", "ARE"),
    c("United Kingdom of Great Britain and Northern Ireland", "GB", "GBR"),
    c("United States of America", "US", "USA"),
    c("United States Minor Outlying Islands", "UM", "UMI"),
    c("Uruguay", "UY", "URY"),
    c("Uzbekistan", "UZ", "UZB"),
    c("Vanuatu", "VU", "VUT"),
    c("Venezuela, Bolivarian Republic of", "VE", "VEN"),
    c("Viet Nam", "VN", "VNM"),
    c("Virgin Islands, British", "VG", "VGB"),
    c("Virgin Islands, U.S.", "VI", "VIR"),
    c("Wallis and Futuna", "WF", "WLF"),
    c("Western Sahara", "EH", "ESH"),
    c("Yemen", "YE", "YEM"),
    c("Zambia", "ZM", "ZMB"),
    c("Zimbabwe", "ZW", "ZWE"),
];

/// Find a reference entry by its alpha-3 code, ignoring case
pub fn by_alpha3(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.alpha3.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let alpha3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        let alpha2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha2).collect();
        assert_eq!(COUNTRIES.len(), 249);
        assert_eq!(alpha3.len(), COUNTRIES.len());
        assert_eq!(alpha2.len(), COUNTRIES.len());
    }

    #[test]
    fn test_code_shape() {
        for country in COUNTRIES {
            assert_eq!(country.alpha2.len(), 2, "{}", country.name);
            assert_eq!(country.alpha3.len(), 3, "{}", country.name);
            assert!(country.alpha3.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_by_alpha3() {
        assert_eq!(by_alpha3("lka").map(|c| c.name), Some("Sri Lanka"));
        assert!(by_alpha3("XXX").is_none());
    }
}
