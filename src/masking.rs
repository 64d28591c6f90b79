//! Brazilian document formatting for display.
//!
//! CPF (individual taxpayer id) is always masked; CNPJ (company id) is
//! public registry data and only punctuated. Both leave malformed input
//! untouched.

pub const CPF_PLACEHOLDER: &str = "PENDENTE";
pub const CNPJ_PLACEHOLDER: &str = "N/A";

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a CPF as `123.***.***-00`.
///
/// Absent or empty input yields `"PENDENTE"`; anything that does not carry
/// exactly 11 digits is returned unchanged.
pub fn mask_cpf(cpf: Option<&str>) -> String {
    let raw = match cpf {
        Some(v) if !v.is_empty() => v,
        _ => return CPF_PLACEHOLDER.to_string(),
    };
    let clean = digits_only(raw);
    if clean.len() != 11 {
        return raw.to_string();
    }
    format!("{}.***.***-{}", &clean[..3], &clean[9..])
}

/// Format a CNPJ as `12.345.678/0001-90`.
///
/// Absent or empty input yields `"N/A"`; anything that does not carry
/// exactly 14 digits is returned unchanged.
pub fn format_cnpj(cnpj: Option<&str>) -> String {
    let raw = match cnpj {
        Some(v) if !v.is_empty() => v,
        _ => return CNPJ_PLACEHOLDER.to_string(),
    };
    let clean = digits_only(raw);
    if clean.len() != 14 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &clean[..2],
        &clean[2..5],
        &clean[5..8],
        &clean[8..12],
        &clean[12..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_cpf_eleven_digits() {
        assert_eq!(mask_cpf(Some("12345678900")), "123.***.***-00");
    }

    #[test]
    fn test_mask_cpf_punctuated_input() {
        assert_eq!(mask_cpf(Some("123.456.789-00")), "123.***.***-00");
    }

    #[test]
    fn test_mask_cpf_wrong_length_unchanged() {
        assert_eq!(mask_cpf(Some("123")), "123");
        assert_eq!(mask_cpf(Some("abc")), "abc");
    }

    #[test]
    fn test_mask_cpf_absent() {
        assert_eq!(mask_cpf(None), "PENDENTE");
        assert_eq!(mask_cpf(Some("")), "PENDENTE");
    }

    #[test]
    fn test_mask_cpf_idempotent() {
        let once = mask_cpf(Some("98765432100"));
        assert_eq!(once, "987.***.***-00");
        assert_eq!(mask_cpf(Some(&once)), once);
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj(Some("12345678000190")), "12.345.678/0001-90");
        assert_eq!(format_cnpj(Some("12.345.678/0001-90")), "12.345.678/0001-90");
    }

    #[test]
    fn test_format_cnpj_invalid_or_absent() {
        assert_eq!(format_cnpj(Some("1234")), "1234");
        assert_eq!(format_cnpj(None), "N/A");
        assert_eq!(format_cnpj(Some("")), "N/A");
    }
}
