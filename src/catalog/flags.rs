// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in country table.
//!
//! One row per flag: display name, asset slug under `Flags/`, continent and
//! ISO 3166-1 alpha-2 code. Rows are grouped by continent; the order here is
//! the catalog order every listing preserves.

use crate::types::Continent::{self, *};

pub(crate) const FLAGS: &[(&str, &str, Continent, &str)] = &[
    // Africa
    ("Algeria", "algeria", Africa, "DZ"),
    ("Angola", "angola", Africa, "AO"),
    ("Benin", "benin", Africa, "BJ"),
    ("Botswana", "botswana", Africa, "BW"),
    ("Burkina Faso", "burkina-faso", Africa, "BF"),
    ("Burundi", "burundi", Africa, "BI"),
    ("Cabo Verde", "cabo-verde", Africa, "CV"),
    ("Cameroon", "cameroon", Africa, "CM"),
    ("Central African Republic", "central-african-republic", Africa, "CF"),
    ("Chad", "chad", Africa, "TD"),
    ("Comoros", "comoros", Africa, "KM"),
    ("Congo", "congo", Africa, "CG"),
    ("DR Congo", "congo-democratic-republic", Africa, "CD"),
    ("Côte d'Ivoire", "cote-divoire", Africa, "CI"),
    ("Djibouti", "djibouti", Africa, "DJ"),
    ("Egypt", "egypt", Africa, "EG"),
    ("Equatorial Guinea", "equatorial-guinea", Africa, "GQ"),
    ("Eritrea", "eritrea", Africa, "ER"),
    ("Eswatini", "eswatini", Africa, "SZ"),
    ("Ethiopia", "ethiopia", Africa, "ET"),
    ("Gabon", "gabon", Africa, "GA"),
    ("Gambia", "gambia", Africa, "GM"),
    ("Ghana", "ghana", Africa, "GH"),
    ("Guinea", "guinea", Africa, "GN"),
    ("Guinea-Bissau", "guinea-bissau", Africa, "GW"),
    ("Kenya", "kenya", Africa, "KE"),
    ("Lesotho", "lesotho", Africa, "LS"),
    ("Liberia", "liberia", Africa, "LR"),
    ("Libya", "libya", Africa, "LY"),
    ("Madagascar", "madagascar", Africa, "MG"),
    ("Malawi", "malawi", Africa, "MW"),
    ("Mali", "mali", Africa, "ML"),
    ("Mauritania", "mauritania", Africa, "MR"),
    ("Mauritius", "mauritius", Africa, "MU"),
    ("Mayotte", "mayotte", Africa, "YT"),
    ("Morocco", "morocco", Africa, "MA"),
    ("Mozambique", "mozambique", Africa, "MZ"),
    ("Namibia", "namibia", Africa, "NA"),
    ("Niger", "niger", Africa, "NE"),
    ("Nigeria", "nigeria", Africa, "NG"),
    ("Réunion", "reunion", Africa, "RE"),
    ("Rwanda", "rwanda", Africa, "RW"),
    ("Saint Helena", "saint-helena", Africa, "SH"),
    ("São Tomé and Príncipe", "sao-tome-and-principe", Africa, "ST"),
    ("Senegal", "senegal", Africa, "SN"),
    ("Seychelles", "seychelles", Africa, "SC"),
    ("Sierra Leone", "sierra-leone", Africa, "SL"),
    ("Somalia", "somalia", Africa, "SO"),
    ("South Africa", "south-africa", Africa, "ZA"),
    ("South Sudan", "south-sudan", Africa, "SS"),
    ("Sudan", "sudan", Africa, "SD"),
    ("Tanzania", "tanzania", Africa, "TZ"),
    ("Togo", "togo", Africa, "TG"),
    ("Tunisia", "tunisia", Africa, "TN"),
    ("Uganda", "uganda", Africa, "UG"),
    ("Western Sahara", "western-sahara", Africa, "EH"),
    ("Zambia", "zambia", Africa, "ZM"),
    ("Zimbabwe", "zimbabwe", Africa, "ZW"),

    // Asia
    ("Afghanistan", "afghanistan", Asia, "AF"),
    ("Armenia", "armenia", Asia, "AM"),
    ("Azerbaijan", "azerbaijan", Asia, "AZ"),
    ("Bahrain", "bahrain", Asia, "BH"),
    ("Bangladesh", "bangladesh", Asia, "BD"),
    ("Bhutan", "bhutan", Asia, "BT"),
    ("Brunei", "brunei", Asia, "BN"),
    ("Cambodia", "cambodia", Asia, "KH"),
    ("China", "china", Asia, "CN"),
    ("Cyprus", "cyprus", Asia, "CY"),
    ("Georgia", "georgia", Asia, "GE"),
    ("Hong Kong", "hong-kong", Asia, "HK"),
    ("India", "india", Asia, "IN"),
    ("Indonesia", "indonesia", Asia, "ID"),
    ("Iran", "iran", Asia, "IR"),
    ("Iraq", "iraq", Asia, "IQ"),
    ("Israel", "israel", Asia, "IL"),
    ("Japan", "japan", Asia, "JP"),
    ("Jordan", "jordan", Asia, "JO"),
    ("Kazakhstan", "kazakhstan", Asia, "KZ"),
    ("Kuwait", "kuwait", Asia, "KW"),
    ("Kyrgyzstan", "kyrgyzstan", Asia, "KG"),
    ("Laos", "laos", Asia, "LA"),
    ("Lebanon", "lebanon", Asia, "LB"),
    ("Macao", "macao", Asia, "MO"),
    ("Malaysia", "malaysia", Asia, "MY"),
    ("Maldives", "maldives", Asia, "MV"),
    ("Mongolia", "mongolia", Asia, "MN"),
    ("Myanmar", "myanmar", Asia, "MM"),
    ("Nepal", "nepal", Asia, "NP"),
    ("North Korea", "north-korea", Asia, "KP"),
    ("Oman", "oman", Asia, "OM"),
    ("Pakistan", "pakistan", Asia, "PK"),
    ("Palestine", "palestine", Asia, "PS"),
    ("Philippines", "philippines", Asia, "PH"),
    ("Qatar", "qatar", Asia, "QA"),
    ("Saudi Arabia", "saudi-arabia", Asia, "SA"),
    ("Singapore", "singapore", Asia, "SG"),
    ("South Korea", "south-korea", Asia, "KR"),
    ("Sri Lanka", "sri-lanka", Asia, "LK"),
    ("Syria", "syria", Asia, "SY"),
    ("Taiwan", "taiwan", Asia, "TW"),
    ("Tajikistan", "tajikistan", Asia, "TJ"),
    ("Thailand", "thailand", Asia, "TH"),
    ("Timor-Leste", "timor-leste", Asia, "TL"),
    ("Turkey", "turkey", Asia, "TR"),
    ("Turkmenistan", "turkmenistan", Asia, "TM"),
    ("UAE", "united-arab-emirates", Asia, "AE"),
    ("Uzbekistan", "uzbekistan", Asia, "UZ"),
    ("Vietnam", "vietnam", Asia, "VN"),
    ("Yemen", "yemen", Asia, "YE"),

    // Europe
    ("Åland Islands", "aland-islands", Europe, "AX"),
    ("Albania", "albania", Europe, "AL"),
    ("Andorra", "andorra", Europe, "AD"),
    ("Austria", "austria", Europe, "AT"),
    ("Belarus", "belarus", Europe, "BY"),
    ("Belgium", "belgium", Europe, "BE"),
    ("Bosnia and Herzegovina", "bosnia-and-herzegovina", Europe, "BA"),
    ("Bulgaria", "bulgaria", Europe, "BG"),
    ("Croatia", "croatia", Europe, "HR"),
    ("Czechia", "czechia", Europe, "CZ"),
    ("Denmark", "denmark", Europe, "DK"),
    ("Estonia", "estonia", Europe, "EE"),
    ("Faroe Islands", "faroe-islands", Europe, "FO"),
    ("Finland", "finland", Europe, "FI"),
    ("France", "france", Europe, "FR"),
    ("Germany", "germany", Europe, "DE"),
    ("Gibraltar", "gibraltar", Europe, "GI"),
    ("Greece", "greece", Europe, "GR"),
    ("Guernsey", "guernsey", Europe, "GG"),
    ("Hungary", "hungary", Europe, "HU"),
    ("Iceland", "iceland", Europe, "IS"),
    ("Ireland", "ireland", Europe, "IE"),
    ("Isle of Man", "isle-of-man", Europe, "IM"),
    ("Italy", "italy", Europe, "IT"),
    ("Jersey", "jersey", Europe, "JE"),
    ("Kosovo", "kosovo", Europe, "XK"),
    ("Latvia", "latvia", Europe, "LV"),
    ("Liechtenstein", "liechtenstein", Europe, "LI"),
    ("Lithuania", "lithuania", Europe, "LT"),
    ("Luxembourg", "luxembourg", Europe, "LU"),
    ("Malta", "malta", Europe, "MT"),
    ("Moldova", "moldova", Europe, "MD"),
    ("Monaco", "monaco", Europe, "MC"),
    ("Montenegro", "montenegro", Europe, "ME"),
    ("Netherlands", "netherlands", Europe, "NL"),
    ("North Macedonia", "north-macedonia", Europe, "MK"),
    ("Norway", "norway", Europe, "NO"),
    ("Poland", "poland", Europe, "PL"),
    ("Portugal", "portugal", Europe, "PT"),
    ("Romania", "romania", Europe, "RO"),
    ("Russia", "russia", Europe, "RU"),
    ("San Marino", "san-marino", Europe, "SM"),
    ("Serbia", "serbia", Europe, "RS"),
    ("Slovakia", "slovakia", Europe, "SK"),
    ("Slovenia", "slovenia", Europe, "SI"),
    ("Spain", "spain", Europe, "ES"),
    ("Svalbard and Jan Mayen", "svalbard-and-jan-mayen", Europe, "SJ"),
    ("Sweden", "sweden", Europe, "SE"),
    ("Switzerland", "switzerland", Europe, "CH"),
    ("Ukraine", "ukraine", Europe, "UA"),
    ("United Kingdom", "united-kingdom", Europe, "GB"),
    ("Vatican City", "vatican-city", Europe, "VA"),

    // NorthAmerica
    ("Anguilla", "anguilla", NorthAmerica, "AI"),
    ("Antigua and Barbuda", "antigua-and-barbuda", NorthAmerica, "AG"),
    ("Aruba", "aruba", NorthAmerica, "AW"),
    ("Bahamas", "bahamas", NorthAmerica, "BS"),
    ("Barbados", "barbados", NorthAmerica, "BB"),
    ("Belize", "belize", NorthAmerica, "BZ"),
    ("Bermuda", "bermuda", NorthAmerica, "BM"),
    ("Bonaire", "bonaire-sint-eustatius-and-saba", NorthAmerica, "BQ"),
    ("British Virgin Islands", "british-virgin-islands", NorthAmerica, "VG"),
    ("Canada", "canada", NorthAmerica, "CA"),
    ("Cayman Islands", "cayman-islands", NorthAmerica, "KY"),
    ("Costa Rica", "costa-rica", NorthAmerica, "CR"),
    ("Cuba", "cuba", NorthAmerica, "CU"),
    ("Curaçao", "curacao", NorthAmerica, "CW"),
    ("Dominica", "dominica", NorthAmerica, "DM"),
    ("Dominican Republic", "dominican-republic", NorthAmerica, "DO"),
    ("El Salvador", "el-salvador", NorthAmerica, "SV"),
    ("Greenland", "greenland", NorthAmerica, "GL"),
    ("Grenada", "grenada", NorthAmerica, "GD"),
    ("Guadeloupe", "guadeloupe", NorthAmerica, "GP"),
    ("Guatemala", "guatemala", NorthAmerica, "GT"),
    ("Haiti", "haiti", NorthAmerica, "HT"),
    ("Honduras", "honduras", NorthAmerica, "HN"),
    ("Jamaica", "jamaica", NorthAmerica, "JM"),
    ("Martinique", "martinique", NorthAmerica, "MQ"),
    ("Mexico", "mexico", NorthAmerica, "MX"),
    ("Montserrat", "montserrat", NorthAmerica, "MS"),
    ("Nicaragua", "nicaragua", NorthAmerica, "NI"),
    ("Panama", "panama", NorthAmerica, "PA"),
    ("Puerto Rico", "puerto-rico", NorthAmerica, "PR"),
    ("Saint Barthélemy", "saint-barthelemy", NorthAmerica, "BL"),
    ("Saint Kitts and Nevis", "saint-kitts-and-nevis", NorthAmerica, "KN"),
    ("Saint Lucia", "saint-lucia", NorthAmerica, "LC"),
    ("Saint Martin", "saint-martin", NorthAmerica, "MF"),
    ("Saint Pierre and Miquelon", "saint-pierre-and-miquelon", NorthAmerica, "PM"),
    ("Saint Vincent", "saint-vincent-and-the-grenadines", NorthAmerica, "VC"),
    ("Sint Maarten", "sint-maarten", NorthAmerica, "SX"),
    ("Trinidad and Tobago", "trinidad-and-tobago", NorthAmerica, "TT"),
    ("Turks and Caicos", "turks-and-caicos-islands", NorthAmerica, "TC"),
    ("United States", "united-states", NorthAmerica, "US"),
    ("US Virgin Islands", "us-virgin-islands", NorthAmerica, "VI"),

    // SouthAmerica
    ("Argentina", "argentina", SouthAmerica, "AR"),
    ("Bolivia", "bolivia", SouthAmerica, "BO"),
    ("Brazil", "brazil", SouthAmerica, "BR"),
    ("Chile", "chile", SouthAmerica, "CL"),
    ("Colombia", "colombia", SouthAmerica, "CO"),
    ("Ecuador", "ecuador", SouthAmerica, "EC"),
    ("Falkland Islands", "falkland-islands", SouthAmerica, "FK"),
    ("French Guiana", "french-guiana", SouthAmerica, "GF"),
    ("Guyana", "guyana", SouthAmerica, "GY"),
    ("Paraguay", "paraguay", SouthAmerica, "PY"),
    ("Peru", "peru", SouthAmerica, "PE"),
    ("Suriname", "suriname", SouthAmerica, "SR"),
    ("Uruguay", "uruguay", SouthAmerica, "UY"),
    ("Venezuela", "venezuela", SouthAmerica, "VE"),

    // Oceania
    ("American Samoa", "american-samoa", Oceania, "AS"),
    ("Australia", "australia", Oceania, "AU"),
    ("Christmas Island", "christmas-island", Oceania, "CX"),
    ("Cocos Islands", "cocos-islands", Oceania, "CC"),
    ("Cook Islands", "cook-islands", Oceania, "CK"),
    ("Fiji", "fiji", Oceania, "FJ"),
    ("French Polynesia", "french-polynesia", Oceania, "PF"),
    ("Guam", "guam", Oceania, "GU"),
    ("Kiribati", "kiribati", Oceania, "KI"),
    ("Marshall Islands", "marshall-islands", Oceania, "MH"),
    ("Micronesia", "micronesia", Oceania, "FM"),
    ("Nauru", "nauru", Oceania, "NR"),
    ("New Caledonia", "new-caledonia", Oceania, "NC"),
    ("New Zealand", "new-zealand", Oceania, "NZ"),
    ("Niue", "niue", Oceania, "NU"),
    ("Norfolk Island", "norfolk-island", Oceania, "NF"),
    ("Northern Mariana Islands", "northern-mariana-islands", Oceania, "MP"),
    ("Palau", "palau", Oceania, "PW"),
    ("Papua New Guinea", "papua-new-guinea", Oceania, "PG"),
    ("Pitcairn Islands", "pitcairn-islands", Oceania, "PN"),
    ("Samoa", "samoa", Oceania, "WS"),
    ("Solomon Islands", "solomon-islands", Oceania, "SB"),
    ("Tokelau", "tokelau", Oceania, "TK"),
    ("Tonga", "tonga", Oceania, "TO"),
    ("Tuvalu", "tuvalu", Oceania, "TV"),
    ("Vanuatu", "vanuatu", Oceania, "VU"),
    ("Wallis and Futuna", "wallis-and-futuna", Oceania, "WF"),

    // Antarctica
    ("Antarctica", "antarctica", Antarctica, "AQ"),
    ("Bouvet Island", "bouvet-island", Antarctica, "BV"),
    ("French Southern Territories", "french-southern-territories", Antarctica, "TF"),
    ("Heard Island", "heard-island-and-mcdonald-islands", Antarctica, "HM"),
    ("South Georgia", "south-georgia-and-south-sandwich-islands", Antarctica, "GS"),
];
