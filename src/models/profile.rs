use serde::{Deserialize, Serialize};
use crate::models::interest_area::InterestArea;

/// Perfil de mentor (resultado de búsqueda)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub affiliation_type: Option<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub interest_area: Vec<InterestArea>,
}

/// Perfil de mentorado (resultado de búsqueda)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mentored {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub academic_summary: Option<String>,
    #[serde(default)]
    pub interest_area: Vec<InterestArea>,
}

/// Iniciales para el avatar: primera letra del primer y del último nombre
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let first = parts.first().and_then(|p| p.chars().next());
    let last = if parts.len() > 1 {
        parts.last().and_then(|p| p.chars().next())
    } else {
        None
    };
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

/// Nombre legible del curso (el código se devuelve tal cual si no se conoce)
pub fn course_label(code: &str) -> &str {
    match code {
        "ADMINISTRACAO" => "Administração",
        "DIREITO" => "Direito",
        "MEDICINA" => "Medicina",
        "ENGENHARIA_CIVIL" => "Engenharia Civil",
        "CIENCIA_DA_COMPUTACAO" => "Ciência da Computação",
        "PSICOLOGIA" => "Psicologia",
        "ENFERMAGEM" => "Enfermagem",
        "ARQUITETURA_E_URBANISMO" => "Arquitetura e Urbanismo",
        "CONTABILIDADE" => "Ciências Contábeis",
        "ODONTOLOGIA" => "Odontologia",
        "PEDAGOGIA" => "Pedagogia",
        "FISIOTERAPIA" => "Fisioterapia",
        "NUTRICIONISMO" => "Nutrição",
        "EDUCACAO_FISICA" => "Educação Física",
        "VETERINARIA" => "Medicina Veterinária",
        "ZOOTECNIA" => "Zootecnia",
        "LETRAS" => "Letras",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("maria da silva"), "MS");
        assert_eq!(initials("  João  "), "J");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_course_label() {
        assert_eq!(course_label("CIENCIA_DA_COMPUTACAO"), "Ciência da Computação");
        assert_eq!(course_label("ASTRONOMIA"), "ASTRONOMIA");
    }

    #[test]
    fn test_mentor_defaults_missing_lists() {
        let mentor: Mentor = serde_json::from_str(r#"{"id":1,"fullName":"Ana Lima"}"#).unwrap();
        assert!(mentor.specializations.is_empty());
        assert!(mentor.interest_area.is_empty());
    }
}
