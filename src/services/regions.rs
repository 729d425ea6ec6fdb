//! Regency → district lookup used by the registration form.

/// Regencies in display order, each with its districts (kecamatan) in alphabetical order.
pub(crate) const REGION_DATA: &[(&str, &[&str])] = &[
    (
        "Pacitan",
        &[
            "Arjosari",
            "Bandar",
            "Donorojo",
            "Kebonagung",
            "Nawangan",
            "Ngadirojo",
            "Pacitan",
            "Pringkuku",
            "Punung",
            "Sudimoro",
            "Tegalombo",
            "Tulakan",
        ],
    ),
    (
        "Ponorogo",
        &[
            "Babadan",
            "Badegan",
            "Balong",
            "Bungkal",
            "Jambon",
            "Jenangan",
            "Jetis",
            "Kauman",
            "Mlarak",
            "Ngebel",
            "Ngrayun",
            "Ponorogo",
            "Pudak",
            "Pulung",
            "Sambit",
            "Sampung",
            "Sawoo",
            "Siman",
            "Slahung",
            "Sooko",
            "Sukorejo",
        ],
    ),
    (
        "Trenggalek",
        &[
            "Bendungan",
            "Dongko",
            "Durenan",
            "Gandusari",
            "Kampak",
            "Karangan",
            "Munjungan",
            "Panggul",
            "Pogalan",
            "Pule",
            "Suruh",
            "Trenggalek",
            "Tugu",
            "Watulimo",
        ],
    ),
    (
        "Magetan",
        &[
            "Barat",
            "Bendo",
            "Karangrejo",
            "Karas",
            "Kartoharjo",
            "Kawedanan",
            "Lembeyan",
            "Magetan",
            "Maospati",
            "Ngariboyo",
            "Nguntoronadi",
            "Panekan",
            "Parang",
            "Plaosan",
            "Poncol",
            "Sidorejo",
            "Sukomoro",
            "Takeran",
        ],
    ),
    (
        "Wonogiri",
        &[
            "Baturetno",
            "Batuwarno",
            "Bulukerto",
            "Eromoko",
            "Girimarto",
            "Giritontro",
            "Giriwoyo",
            "Jatipurno",
            "Jatiroto",
            "Jatisrono",
            "Karangtengah",
            "Kismantoro",
            "Manyaran",
            "Ngadirojo",
            "Nguntoronadi",
            "Paranggupito",
            "Pracimantoro",
            "Puhpelem",
            "Purwantoro",
            "Selogiri",
            "Sidoharjo",
            "Slogohimo",
            "Tirtomoyo",
            "Wonogiri",
            "Wuryantoro",
        ],
    ),
];

pub(crate) fn regencies() -> impl Iterator<Item = &'static str> {
    REGION_DATA.iter().map(|(regency, _)| *regency)
}

/// Canonical regency name and its districts, matched case-insensitively.
pub(crate) fn districts(regency: &str) -> Option<(&'static str, &'static [&'static str])> {
    let wanted = regency.trim();
    REGION_DATA.iter().find(|(name, _)| name.eq_ignore_ascii_case(wanted)).copied()
}

/// Resolves a regency/district pair to its canonical spelling.
pub(crate) fn canonical_pair(regency: &str, district: &str) -> Option<(&'static str, &'static str)> {
    let (regency, districts) = districts(regency)?;
    let wanted = district.trim();
    let district = districts.iter().find(|name| name.eq_ignore_ascii_case(wanted))?;

    Some((regency, *district))
}
