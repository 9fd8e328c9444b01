//! Medication name handling shared by both engines.
//!
//! The contraindication engine and the dosing engine both key their lookup
//! tables by medication name. They MUST use the same normalization routine:
//! two independently lower-casing call sites is exactly the kind of drift
//! that lets a rule silently stop matching.

/// Normalize a medication name for table lookup.
///
/// Trims surrounding whitespace and lower-cases ASCII letters. Interior
/// whitespace and punctuation are preserved so compound keys like
/// `"semaglutide (ozempic)"` keep their shape.
///
/// ```
/// use glycos_contracts::medication::normalize_medication_name;
///
/// assert_eq!(normalize_medication_name("  Metformin "), "metformin");
/// assert_eq!(
///     normalize_medication_name("Semaglutide (Ozempic)"),
///     "semaglutide (ozempic)"
/// );
/// ```
pub fn normalize_medication_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
