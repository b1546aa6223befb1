//! Content catalog for the presentation
//!
//! An immutable, read-only dataset: the ordered sections and, per
//! section, the interactive items the viewer can select or hover. The
//! session core never copies item data; it stores ids and looks the
//! records up here when a consumer asks for display metadata.
//!
//! The catalog is validated once at session construction; after that
//! every id-based lookup is a plain indexed read.

mod data;

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::selection::ItemSpace;

/// One top-level panel in the fixed presentation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Contiguous id, equal to the section's position in the deck
    pub id: usize,
    pub title: &'static str,
    pub icon: &'static str,
}

/// An actor in the BaaS ecosystem diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Diagram position, percent of the canvas
    pub x: u8,
    pub y: u8,
    pub responsibilities: &'static [&'static str],
}

/// Labelled edge between two ecosystem participants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

/// A BaaS partnership arrangement with its trade-offs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessModel {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    /// Operational chain rendered between animated connectors
    pub flow: &'static [&'static str],
}

/// Regulatory standing of a service in the BCB consultation draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Explicitly covered by the draft resolution
    PredictedInDraft,
    UnderDiscussion,
    ProposedInclusion,
    UnderEvaluation,
    PossibleExpansion,
}

impl ServiceStatus {
    /// Display label, as shown on the status badge
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::PredictedInDraft => "Previsto na minuta",
            ServiceStatus::UnderDiscussion => "Em discussão",
            ServiceStatus::ProposedInclusion => "Proposta de inclusão",
            ServiceStatus::UnderEvaluation => "Em avaliação",
            ServiceStatus::PossibleExpansion => "Possível expansão",
        }
    }
}

/// A financial service inside the BaaS regulatory scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub desc: &'static str,
    pub details: &'static [&'static str],
    pub status: ServiceStatus,
}

/// One of the normative principles proposed by the regulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Progress marker of a regulatory timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStatus {
    Done,
    Current,
    Pending,
}

/// One milestone of the public consultation process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub event: &'static str,
    pub status: TimelineStatus,
}

/// A named risk with a 1-5 severity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Risk {
    pub name: &'static str,
    pub severity: u8,
    pub desc: &'static str,
}

impl Risk {
    pub const MIN_SEVERITY: u8 = 1;
    pub const MAX_SEVERITY: u8 = 5;
}

/// A group of related risks sharing a color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskCategory {
    pub category: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub risks: &'static [Risk],
}

/// An opportunity card with its metric highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opportunity {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
    pub metrics: &'static [&'static str],
}

/// Regional snapshot of the global BaaS market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub flag: &'static str,
    pub color: &'static str,
    pub highlight: &'static str,
    pub desc: &'static str,
    pub cases: &'static [&'static str],
}

/// One headline number of the Brazil infrastructure panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStat {
    pub label: &'static str,
    pub value: &'static str,
    pub desc: &'static str,
}

/// Catalog integrity failures, detected at session construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Deck has no sections")]
    EmptyDeck,
    #[error("Section id {found} at position {position} breaks the contiguous ordering")]
    NonContiguousSections { position: usize, found: usize },
    #[error("Duplicate {space} id '{id}'")]
    DuplicateItem { space: ItemSpace, id: &'static str },
    #[error("Connection '{label}' references unknown participant '{endpoint}'")]
    UnknownConnectionEndpoint {
        label: &'static str,
        endpoint: &'static str,
    },
    #[error("Risk '{name}' has severity {severity}, outside 1..=5")]
    SeverityOutOfRange { name: &'static str, severity: u8 },
}

/// The complete content of one presentation
///
/// All fields are static slices: the deck is descriptive data with no
/// behavior, defined once in `catalog::data` and shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    pub sections: &'static [Section],
    pub participants: &'static [Participant],
    pub connections: &'static [Connection],
    pub business_models: &'static [BusinessModel],
    pub services: &'static [Service],
    pub principles: &'static [Principle],
    pub timeline: &'static [TimelineEntry],
    pub discussion_topics: &'static [&'static str],
    pub risk_categories: &'static [RiskCategory],
    /// Case study shown under the risk map
    pub case_study: &'static str,
    pub opportunities: &'static [Opportunity],
    pub embedded_finance_sectors: &'static [&'static str],
    pub regions: &'static [Region],
    pub brazil_stats: &'static [RegionStat],
}

impl Deck {
    /// Returns the full Banking-as-a-Service deck
    pub fn standard() -> Self {
        data::STANDARD_DECK
    }

    /// Number of sections in the presentation
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Looks up a section by id
    pub fn section(&self, id: usize) -> Option<&'static Section> {
        self.sections.get(id)
    }

    /// Looks up an ecosystem participant by id
    pub fn participant(&self, id: &str) -> Option<&'static Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Looks up a business model by id
    pub fn business_model(&self, id: &str) -> Option<&'static BusinessModel> {
        self.business_models.iter().find(|m| m.id == id)
    }

    /// Looks up a service by id
    pub fn service(&self, id: &str) -> Option<&'static Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Checks the deck's structural invariants
    ///
    /// Verifies that section ids are contiguous and ordered, that item
    /// ids are unique within their item-space, that every connection
    /// edge references a known participant, and that risk severities
    /// stay in range.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sections.is_empty() {
            return Err(CatalogError::EmptyDeck);
        }
        for (position, section) in self.sections.iter().enumerate() {
            if section.id != position {
                return Err(CatalogError::NonContiguousSections {
                    position,
                    found: section.id,
                });
            }
        }

        Self::check_unique(
            ItemSpace::Participant,
            self.participants.iter().map(|p| p.id),
        )?;
        Self::check_unique(
            ItemSpace::BusinessModel,
            self.business_models.iter().map(|m| m.id),
        )?;
        Self::check_unique(ItemSpace::Service, self.services.iter().map(|s| s.id))?;

        for conn in self.connections {
            for endpoint in [conn.from, conn.to] {
                if self.participant(endpoint).is_none() {
                    return Err(CatalogError::UnknownConnectionEndpoint {
                        label: conn.label,
                        endpoint,
                    });
                }
            }
        }

        for category in self.risk_categories {
            for risk in category.risks {
                if !(Risk::MIN_SEVERITY..=Risk::MAX_SEVERITY).contains(&risk.severity) {
                    return Err(CatalogError::SeverityOutOfRange {
                        name: risk.name,
                        severity: risk.severity,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_unique(
        space: ItemSpace,
        ids: impl Iterator<Item = &'static str>,
    ) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateItem { space, id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_is_valid() {
        Deck::standard().validate().expect("standard deck must pass validation");
    }

    #[test]
    fn standard_deck_shape() {
        let deck = Deck::standard();
        assert_eq!(deck.section_count(), 8);
        assert_eq!(deck.participants.len(), 5);
        assert_eq!(deck.business_models.len(), 3);
        assert_eq!(deck.services.len(), 8);
        assert_eq!(deck.risk_categories.len(), 4);
        assert_eq!(deck.regions.len(), 4);
    }

    #[test]
    fn lookups_by_id() {
        let deck = Deck::standard();

        assert_eq!(deck.section(1).map(|s| s.title), Some("Ecossistema"));
        assert_eq!(deck.section(99), None);

        let bank = deck.participant("bank").expect("bank participant");
        assert_eq!(bank.name, "Instituição Prestadora");
        assert!(deck.participant("nonexistent").is_none());

        assert!(deck.business_model("api-native").is_some());
        assert_eq!(deck.service("pix").map(|s| s.status), Some(ServiceStatus::PredictedInDraft));
    }

    #[test]
    fn connections_link_known_participants() {
        let deck = Deck::standard();
        assert_eq!(deck.connections.len(), 6);
        for conn in deck.connections {
            assert!(deck.participant(conn.from).is_some(), "from {}", conn.from);
            assert!(deck.participant(conn.to).is_some(), "to {}", conn.to);
        }
    }

    #[test]
    fn validation_rejects_non_contiguous_sections() {
        let mut deck = Deck::standard();
        const BROKEN: &[Section] = &[
            Section { id: 0, title: "a", icon: "x" },
            Section { id: 2, title: "b", icon: "y" },
        ];
        deck.sections = BROKEN;

        assert!(matches!(
            deck.validate(),
            Err(CatalogError::NonContiguousSections { position: 1, found: 2 })
        ));
    }

    #[test]
    fn validation_rejects_empty_deck() {
        let mut deck = Deck::standard();
        deck.sections = &[];
        assert!(matches!(deck.validate(), Err(CatalogError::EmptyDeck)));
    }

    #[test]
    fn validation_rejects_duplicate_service_ids() {
        const DUP: &[Service] = &[
            Service {
                id: "pix",
                name: "a",
                icon: "x",
                color: "#fff",
                desc: "",
                details: &[],
                status: ServiceStatus::PredictedInDraft,
            },
            Service {
                id: "pix",
                name: "b",
                icon: "y",
                color: "#fff",
                desc: "",
                details: &[],
                status: ServiceStatus::UnderEvaluation,
            },
        ];
        let mut deck = Deck::standard();
        deck.services = DUP;

        assert!(matches!(
            deck.validate(),
            Err(CatalogError::DuplicateItem { space: ItemSpace::Service, id: "pix" })
        ));
    }

    #[test]
    fn validation_rejects_dangling_connection() {
        const DANGLING: &[Connection] = &[Connection {
            from: "bank",
            to: "ghost",
            label: "Contrato",
        }];
        let mut deck = Deck::standard();
        deck.connections = DANGLING;

        assert!(matches!(
            deck.validate(),
            Err(CatalogError::UnknownConnectionEndpoint { endpoint: "ghost", .. })
        ));
    }

    #[test]
    fn validation_rejects_out_of_range_severity() {
        const HOT: &[RiskCategory] = &[RiskCategory {
            category: "Teste",
            color: "#fff",
            icon: "x",
            risks: &[Risk { name: "overflow", severity: 6, desc: "" }],
        }];
        let mut deck = Deck::standard();
        deck.risk_categories = HOT;

        assert!(matches!(
            deck.validate(),
            Err(CatalogError::SeverityOutOfRange { name: "overflow", severity: 6 })
        ));
    }
}
