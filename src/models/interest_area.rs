use serde::{Deserialize, Serialize};

// ============================================================================
// ÁREAS DE INTERÉS - Enum compartido por búsquedas y materiales
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestArea {
    TecnologiaDaInformacao,
    DesenvolvimentoDeSoftware,
    CienciaDeDadosEIa,
    Ciberseguranca,
    UxUiDesign,
    EngenhariaGeral,
    EngenhariaCivil,
    EngenhariaDeProducao,
    MatematicaEEstatistica,
    Fisica,
    AdministracaoEGestao,
    EmpreendedorismoEInovacao,
    FinancasEContabilidade,
    RecursosHumanos,
    LogisticaECadeiaDeSuprimentos,
    MarketingEComunicacao,
    MarketingDigital,
    Jornalismo,
    PublicidadeEPropaganda,
    ComunicacaoInstitucional,
    CienciasBiologicasESaude,
    Medicina,
    Psicologia,
    Nutricao,
    Biotecnologia,
    Educacao,
    CienciasHumanasESociais,
    Letras,
    Historia,
    Geografia,
    Sociologia,
    Juridico,
    DireitoDigital,
    MeioAmbienteESustentabilidade,
}

use InterestArea::*;

/// (área, código de backend, etiqueta)
const TABLE: [(InterestArea, &str, &str); 34] = [
    (TecnologiaDaInformacao, "TECNOLOGIA_DA_INFORMACAO", "Tecnologia da Informação"),
    (DesenvolvimentoDeSoftware, "DESENVOLVIMENTO_DE_SOFTWARE", "Desenvolvimento de Software"),
    (CienciaDeDadosEIa, "CIENCIA_DE_DADOS_E_IA", "Ciência de Dados e IA"),
    (Ciberseguranca, "CIBERSEGURANCA", "Cibersegurança"),
    (UxUiDesign, "UX_UI_DESIGN", "UX/UI Design"),
    (EngenhariaGeral, "ENGENHARIA_GERAL", "Engenharia Geral"),
    (EngenhariaCivil, "ENGENHARIA_CIVIL", "Engenharia Civil"),
    (EngenhariaDeProducao, "ENGENHARIA_DE_PRODUCAO", "Engenharia de Produção"),
    (MatematicaEEstatistica, "MATEMATICA_E_ESTATISTICA", "Matemática e Estatística"),
    (Fisica, "FISICA", "Física"),
    (AdministracaoEGestao, "ADMINISTRACAO_E_GESTAO", "Administração e Gestão"),
    (EmpreendedorismoEInovacao, "EMPREENDEDORISMO_E_INOVACAO", "Empreendedorismo e Inovação"),
    (FinancasEContabilidade, "FINANCAS_E_CONTABILIDADE", "Finanças e Contabilidade"),
    (RecursosHumanos, "RECURSOS_HUMANOS", "Recursos Humanos"),
    (LogisticaECadeiaDeSuprimentos, "LOGISTICA_E_CADEIA_DE_SUPRIMENTOS", "Logística e Cadeia de Suprimentos"),
    (MarketingEComunicacao, "MARKETING_E_COMUNICACAO", "Marketing e Comunicação"),
    (MarketingDigital, "MARKETING_DIGITAL", "Marketing Digital"),
    (Jornalismo, "JORNALISMO", "Jornalismo"),
    (PublicidadeEPropaganda, "PUBLICIDADE_E_PROPAGANDA", "Publicidade e Propaganda"),
    (ComunicacaoInstitucional, "COMUNICACAO_INSTITUCIONAL", "Comunicação Institucional"),
    (CienciasBiologicasESaude, "CIENCIAS_BIOLOGICAS_E_SAUDE", "Ciências Biológicas e Saúde"),
    (Medicina, "MEDICINA", "Medicina"),
    (Psicologia, "PSICOLOGIA", "Psicologia"),
    (Nutricao, "NUTRICAO", "Nutrição"),
    (Biotecnologia, "BIOTECNOLOGIA", "Biotecnologia"),
    (Educacao, "EDUCACAO", "Educação"),
    (CienciasHumanasESociais, "CIENCIAS_HUMANAS_E_SOCIAIS", "Ciências Humanas e Sociais"),
    (Letras, "LETRAS", "Letras"),
    (Historia, "HISTORIA", "História"),
    (Geografia, "GEOGRAFIA", "Geografia"),
    (Sociologia, "SOCIOLOGIA", "Sociologia"),
    (Juridico, "JURIDICO", "Jurídico"),
    (DireitoDigital, "DIREITO_DIGITAL", "Direito Digital"),
    (MeioAmbienteESustentabilidade, "MEIO_AMBIENTE_E_SUSTENTABILIDADE", "Meio Ambiente e Sustentabilidade"),
];

/// Grupo de áreas para el formulario de materiales
pub struct InterestAreaGroup {
    pub name: &'static str,
    pub key: &'static str,
    pub items: &'static [InterestArea],
}

pub const GROUPS: [InterestAreaGroup; 7] = [
    InterestAreaGroup {
        name: "Tecnologia",
        key: "tecnologia",
        items: &[TecnologiaDaInformacao, DesenvolvimentoDeSoftware, CienciaDeDadosEIa, Ciberseguranca, UxUiDesign],
    },
    InterestAreaGroup {
        name: "Engenharia e Ciências Exatas",
        key: "engenharia",
        items: &[EngenhariaGeral, EngenhariaCivil, EngenhariaDeProducao, MatematicaEEstatistica, Fisica],
    },
    InterestAreaGroup {
        name: "Gestão e Negócios",
        key: "gestao",
        items: &[AdministracaoEGestao, EmpreendedorismoEInovacao, FinancasEContabilidade, RecursosHumanos, LogisticaECadeiaDeSuprimentos],
    },
    InterestAreaGroup {
        name: "Comunicação e Marketing",
        key: "comunicacao",
        items: &[MarketingEComunicacao, MarketingDigital, Jornalismo, PublicidadeEPropaganda, ComunicacaoInstitucional],
    },
    InterestAreaGroup {
        name: "Saúde e Ciências Biológicas",
        key: "saude",
        items: &[CienciasBiologicasESaude, Medicina, Psicologia, Nutricao, Biotecnologia],
    },
    InterestAreaGroup {
        name: "Educação e Ciências Humanas",
        key: "educacao",
        items: &[Educacao, CienciasHumanasESociais, Letras, Historia, Geografia, Sociologia],
    },
    InterestAreaGroup {
        name: "Jurídico e Sustentabilidade",
        key: "juridico",
        items: &[Juridico, DireitoDigital, MeioAmbienteESustentabilidade],
    },
];

impl InterestArea {
    pub fn all() -> impl Iterator<Item = InterestArea> {
        TABLE.iter().map(|(area, _, _)| *area)
    }

    fn entry(self) -> &'static (InterestArea, &'static str, &'static str) {
        // TABLE sigue el orden de declaración del enum
        &TABLE[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().1
    }

    pub fn label(self) -> &'static str {
        self.entry().2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for (index, (area, _, _)) in TABLE.iter().enumerate() {
            assert_eq!(*area as usize, index);
        }
    }

    #[test]
    fn test_code_matches_serde_name() {
        for area in InterestArea::all() {
            let json = serde_json::to_string(&area).unwrap();
            assert_eq!(json, format!("\"{}\"", area.code()));
            let back: InterestArea = serde_json::from_str(&json).unwrap();
            assert_eq!(back, area);
        }
    }

    #[test]
    fn test_groups_cover_every_area_once() {
        let mut seen: Vec<InterestArea> = GROUPS.iter().flat_map(|g| g.items.iter().copied()).collect();
        assert_eq!(seen.len(), 34);
        seen.sort_by_key(|a| *a as usize);
        seen.dedup();
        assert_eq!(seen.len(), 34);
    }

    #[test]
    fn test_labels() {
        assert_eq!(InterestArea::CienciaDeDadosEIa.label(), "Ciência de Dados e IA");
        assert_eq!(InterestArea::UxUiDesign.code(), "UX_UI_DESIGN");
    }
}
