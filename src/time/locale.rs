//! Polish month names in the two grammatical forms the report needs.

/// Locative case ("w styczniu"), indexed by [`Month::index`](super::Month::index).
pub(super) const MONTHS_LOCATIVE: [&str; 12] = [
    "styczniu",
    "lutym",
    "marcu",
    "kwietniu",
    "maju",
    "czerwcu",
    "lipcu",
    "sierpniu",
    "wrześniu",
    "październiku",
    "listopadzie",
    "grudniu",
];

/// Nominative case ("styczeń"), indexed by [`Month::index`](super::Month::index).
pub(super) const MONTHS_NOMINATIVE: [&str; 12] = [
    "styczeń",
    "luty",
    "marzec",
    "kwiecień",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpień",
    "wrzesień",
    "październik",
    "listopad",
    "grudzień",
];
