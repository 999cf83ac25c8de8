//! Fixed wording and whitespace layout of the paper form.
//!
//! The form has two columns on the case-reference lines (case numbers on the
//! left, the court address on the right). They are produced by padding with
//! spaces, exactly like the form the court already receives. The padding
//! widths only line up with the default font and page width, changing any of
//! them shifts the right column.

use crate::document::HalfPoints;

/// Size of regular text.
pub(super) const TEXT_SIZE: HalfPoints = 20;
/// Size of the issuer name in the header.
pub(super) const TITLE_SIZE: HalfPoints = 22;
/// Size of the remark hints and the attribution line.
pub(super) const SMALL_SIZE: HalfPoints = 18;
/// Size of footnotes and footnote markers.
pub(super) const FOOTNOTE_SIZE: HalfPoints = 16;

/// Padding in front of every line of the court address.
pub(super) const COURT_COLUMN: usize = 99;
/// Padding of the court line that follows the `II K` case number.
pub(super) const COURT_COLUMN_AFTER_CASE: usize = 71;
/// Padding of the centered issuer line above the narrative.
pub(super) const ISSUER_LINE_INDENT: usize = 27;

pub(super) const ISSUER_NAME: &str = "Ośrodek Sportu i Rekreacji w Brodnicy";
pub(super) const ISSUER_ADDRESS: &str = "87-300 BRODNICA, ul. Królowej Jadwigi 1";
pub(super) const ISSUER_PHONE: &str = "tel. 056/ 491 34 40, fax 056/ 491 34 41";
pub(super) const ISSUER_TAX_ID: &str = "NIP 874-10-40-451";
pub(super) const ISSUER_LINE: &str =
    "OŚRODEK SPORTU i REKREACJI  w  BRODNICY, ul. Królowej Jadwigi 1";
pub(super) const ISSUER_CITY: &str = "BRODNICA";

pub(super) const COURT_NAME: &str = "Sąd Rejonowy";
pub(super) const COURT_DEPARTMENT: &str = "Zespół Kuratorskiej Służby Sądowej";
pub(super) const COURT_DIVISION: &str = "wykonujący orzeczenia w sprawach karnych";
pub(super) const COURT_STREET: &str = "ul. Sądowa  5";
pub(super) const COURT_CITY: &str = "87-300  BRODNICA";

pub(super) const CASE_KOW: &str = "Kow";
pub(super) const CASE_WO: &str = "Wo";
pub(super) const CASE_II_K: &str = "II K";

pub(super) const CONVICT_PREFIX: &str = "Informuję, że skazana/y ukarana/y ";
pub(super) const RESIDENCE_PREFIX: &str = "Zamieszkała/y ";
pub(super) const HOURS_SUFFIX: &str =
    " godzin nieodpłatnej kontrolowanej pracy na cele społeczne w ramach kary";
pub(super) const SENTENCE_REFERENCE: &str = "orzeczonej w przedmiotowej sprawie.";
pub(super) const SCHEDULE_COMPLIANT: &str =
    "Skazana/y ukarana/y  wykonywał/a wskazane prace zgodnie z ustalonym harmonogramem/";
pub(super) const SCHEDULE_NONCOMPLIANT: &str = "niezgodnie z ustalonym harmonogramem.";

pub(super) const TABLE_DATE: &str = "Data";
pub(super) const TABLE_HOURS: &str = "Liczba  godzin";
pub(super) const TABLE_SUM: &str = "SUMA";

pub(super) const REMARKS_TITLE: &str =
    "Ocena wykonywanej pracy i postawy skazanej/go ukaranej/go ewentualne uwagi:";
pub(super) const REMARKS_HINT_KIND: &str =
    "/rodzaj wykonywanej pracy ,nie zgłoszenie się do pracy w wyznaczonym terminie,";
pub(super) const REMARKS_HINT_VIOLATIONS: &str = "Nie podjęcie przydzielonej pracy, opuszczenie pracy bez uzasadnienia, inne przypadki rażącego lub uporczywego nieprzestrzegania porządku i dyscypliny pracy/";

pub(super) const WORK_START: &str = "Dzień przystąpienia do wykonywania prac ";
pub(super) const WORK_END: &str = "Dzień  zakończenia wykonywania prac ";
pub(super) const WORK_START_MARKER: &str = "¹";
pub(super) const WORK_END_MARKER: &str = "²";
pub(super) const WORK_START_FOOTNOTE: &str =
    "¹ wypełnić w przypadku zaświadczenia za pierwszy m-c wyk. prac";
pub(super) const WORK_END_FOOTNOTE: &str = "² wypełnić w przypadku zaświadczenia za ostatni miesiąc";

pub(super) const CREATED_BY: &str = "utworzył: ";

/// Prefixes `text` with `width` spaces.
#[must_use]
pub(super) fn padded(width: usize, text: &str) -> String {
    format!("{:width$}{}", "", text, width = width)
}

/// `wykonał  w   marcu   2024  r.`
#[must_use]
pub(super) fn period_line(month: &str, year: impl std::fmt::Display) -> String {
    format!("wykonał  w   {month}   {year}  r.")
}

/// `BRODNICA,  dnia 5 marzec 2024 r.`
#[must_use]
pub(super) fn footer_line(day: usize, month: &str, year: impl std::fmt::Display) -> String {
    format!("{ISSUER_CITY},  dnia {day} {month} {year} r.")
}
