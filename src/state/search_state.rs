// ============================================================================
// SEARCH STATE - Búsqueda de mentores / mentorados
// ============================================================================
// Cada petición lleva un número de secuencia; las respuestas de peticiones
// anteriores a la última se descartan.
// ============================================================================

use std::collections::HashSet;
use crate::error::ApiError;
use crate::models::{InterestArea, Mentor, Mentored};

/// Parámetros efectivos de una búsqueda de mentores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorQuery {
    pub interest_area: Option<InterestArea>,
    pub specializations: Vec<String>,
}

/// Selección de áreas compartida por las dos búsquedas (orden de selección)
fn toggle_in(selected: &mut Vec<InterestArea>, area: InterestArea) {
    if let Some(pos) = selected.iter().position(|a| *a == area) {
        selected.remove(pos);
    } else {
        selected.push(area);
    }
}

/// "react, node.js , " → ["react", "node.js"]
pub fn parse_specializations(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct MentorSearchState {
    pub selected_areas: Vec<InterestArea>,
    pub specializations_input: String,
    pub areas_menu_open: bool,
    pub results: Vec<Mentor>,
    pub loading: bool,
    pub search_performed: bool,
    pub error_message: Option<String>,
    request_seq: u64,
}

impl MentorSearchState {
    pub fn toggle_area(&mut self, area: InterestArea) {
        toggle_in(&mut self.selected_areas, area);
    }

    pub fn is_selected(&self, area: InterestArea) -> bool {
        self.selected_areas.contains(&area)
    }

    pub fn clear_areas(&mut self) {
        self.selected_areas.clear();
    }

    pub fn set_specializations_input(&mut self, input: String) {
        self.specializations_input = input;
    }

    /// `None` si no hay ningún filtro activo. El backend acepta una sola
    /// área: se usa la primera seleccionada.
    pub fn query(&self) -> Option<MentorQuery> {
        let specializations = parse_specializations(&self.specializations_input);
        let interest_area = self.selected_areas.first().copied();
        if interest_area.is_none() && specializations.is_empty() {
            return None;
        }
        Some(MentorQuery {
            interest_area,
            specializations,
        })
    }

    /// Sin filtros: lista vacía y "búsqueda no realizada"
    pub fn reset_results(&mut self) {
        self.request_seq += 1;
        self.results.clear();
        self.loading = false;
        self.search_performed = false;
        self.error_message = None;
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error_message = None;
        self.request_seq
    }

    /// Devuelve `false` si la respuesta llegó tarde y se ignoró
    pub fn apply_results(&mut self, seq: u64, result: Result<Vec<Mentor>, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.search_performed = true;
        match result {
            Ok(mentors) => self.results = mentors,
            Err(e) => {
                log::error!("❌ [BUSCA] Error buscando mentores: {}", e);
                self.results.clear();
                self.error_message = Some(e.to_string());
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct MentoredSearchState {
    pub selected_areas: Vec<InterestArea>,
    pub areas_menu_open: bool,
    pub results: Vec<Mentored>,
    pub loading: bool,
    pub search_performed: bool,
    request_seq: u64,
}

impl MentoredSearchState {
    pub fn toggle_area(&mut self, area: InterestArea) {
        toggle_in(&mut self.selected_areas, area);
    }

    pub fn is_selected(&self, area: InterestArea) -> bool {
        self.selected_areas.contains(&area)
    }

    pub fn clear_areas(&mut self) {
        self.selected_areas.clear();
    }

    /// Sin áreas: búsqueda hecha y vacía ("Nenhum mentorado encontrado.")
    pub fn reset_results(&mut self) {
        self.request_seq += 1;
        self.results.clear();
        self.loading = false;
        self.search_performed = true;
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Un resultado por área; un área que falla cuenta como lista vacía
    pub fn apply_results(&mut self, seq: u64, per_area: Vec<Result<Vec<Mentored>, ApiError>>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.search_performed = true;
        let lists = per_area.into_iter().map(|r| {
            r.unwrap_or_else(|e| {
                log::warn!("⚠️ [BUSCA] Área con error, se ignora: {}", e);
                Vec::new()
            })
        });
        self.results = merge_unique(lists);
        true
    }
}

/// Concatena y elimina duplicados por id, conservando la primera aparición
pub fn merge_unique<I>(lists: I) -> Vec<Mentored>
where
    I: IntoIterator<Item = Vec<Mentored>>,
{
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|m| seen.insert(m.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentored(id: i64, name: &str) -> Mentored {
        Mentored {
            id,
            full_name: name.to_string(),
            course: None,
            academic_summary: None,
            interest_area: Vec::new(),
        }
    }

    fn mentor(id: i64) -> Mentor {
        Mentor {
            id,
            full_name: format!("Mentor {}", id),
            course: None,
            professional_summary: None,
            affiliation_type: None,
            specializations: Vec::new(),
            interest_area: Vec::new(),
        }
    }

    #[test]
    fn test_parse_specializations() {
        assert_eq!(parse_specializations("react, node.js , ,"), vec!["react", "node.js"]);
        assert!(parse_specializations("  ").is_empty());
    }

    #[test]
    fn test_mentor_query_needs_a_filter() {
        let mut state = MentorSearchState::default();
        assert_eq!(state.query(), None);

        state.set_specializations_input("rust".to_string());
        assert_eq!(
            state.query(),
            Some(MentorQuery { interest_area: None, specializations: vec!["rust".to_string()] })
        );

        state.toggle_area(InterestArea::Medicina);
        state.toggle_area(InterestArea::DesenvolvimentoDeSoftware);
        assert_eq!(state.query().unwrap().interest_area, Some(InterestArea::Medicina));

        state.toggle_area(InterestArea::Medicina);
        assert_eq!(
            state.query().unwrap().interest_area,
            Some(InterestArea::DesenvolvimentoDeSoftware)
        );
    }

    #[test]
    fn test_stale_mentor_response_is_ignored() {
        let mut state = MentorSearchState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(state.apply_results(second, Ok(vec![mentor(2)])));
        assert!(!state.apply_results(first, Ok(vec![mentor(1)])));
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].id, 2);
        assert!(state.search_performed);
    }

    #[test]
    fn test_reset_discards_inflight() {
        let mut state = MentorSearchState::default();
        let seq = state.begin_request();
        state.reset_results();
        assert!(!state.apply_results(seq, Ok(vec![mentor(1)])));
        assert!(state.results.is_empty());
        assert!(!state.search_performed);
    }

    #[test]
    fn test_merge_unique_keeps_first() {
        let merged = merge_unique(vec![
            vec![mentored(1, "Ana"), mentored(2, "Bia")],
            vec![mentored(2, "Bia (dup)"), mentored(3, "Caio")],
        ]);
        let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(merged[1].full_name, "Bia");
    }

    #[test]
    fn test_failed_area_counts_as_empty() {
        let mut state = MentoredSearchState::default();
        let seq = state.begin_request();
        state.apply_results(
            seq,
            vec![Ok(vec![mentored(1, "Ana")]), Err(ApiError::Network("x".to_string()))],
        );
        assert_eq!(state.results.len(), 1);
        assert!(state.search_performed);
        assert!(!state.loading);
    }

    #[test]
    fn test_mentored_reset_counts_as_empty_search() {
        let mut state = MentoredSearchState::default();
        assert!(!state.search_performed);

        state.toggle_area(InterestArea::Letras);
        let seq = state.begin_request();
        state.toggle_area(InterestArea::Letras);
        state.reset_results();

        assert!(state.search_performed);
        assert!(!state.loading);
        assert!(!state.apply_results(seq, vec![Ok(vec![mentored(1, "Ana")])]));
        assert!(state.results.is_empty());
    }
}
