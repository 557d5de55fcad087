//! # Scenario and Action-Plan Generation
//!
//! Every non-compliant obligation yields exactly one remediation scenario,
//! routed to responsible capabilities through the [`CapabilityRouter`] and
//! prioritized from its severity. Compliant obligations yield nothing: the
//! partition is exact.
//!
//! The action plan buckets the same non-compliant obligations by urgency:
//! critical items are immediate, high items short-term, the rest long-term.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dataforge_core::{
    ActionId, ActionType, ConfigurationError, EvaluationContext, Priority, ScenarioId,
};

use crate::obligation::Obligation;

/// Routing table from action type to responsible capabilities.
///
/// The default route is mandatory: an obligation whose action type has no
/// explicit route still routes somewhere. Construction rejects an empty
/// default, so routing is total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityRouter {
    routes: BTreeMap<ActionType, Vec<String>>,
    default_route: Vec<String>,
}

impl CapabilityRouter {
    /// Build a router from an explicit table and a fallback route.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyDefaultRoute`] if the fallback
    /// route lists no capability.
    pub fn new(
        routes: BTreeMap<ActionType, Vec<String>>,
        default_route: Vec<String>,
    ) -> Result<Self, ConfigurationError> {
        if default_route.is_empty() {
            return Err(ConfigurationError::EmptyDefaultRoute);
        }
        Ok(Self {
            routes,
            default_route,
        })
    }

    /// The built-in routing table of the AgenticSST capability roster.
    pub fn lmrsst() -> Self {
        let mut routes = BTreeMap::new();
        let mut add = |action_type: ActionType, capabilities: &[&str]| {
            routes.insert(
                action_type,
                capabilities.iter().map(|s| s.to_string()).collect(),
            );
        };
        add(ActionType::Formation, &["ALSS", "CoSS"]);
        add(ActionType::Documentation, &["DocuGen", "LexiNorm"]);
        add(ActionType::EvaluationRisque, &["DiagSST", "Sentinelle"]);
        add(ActionType::ConformiteLegale, &["LexiNorm", "Hugo"]);
        add(ActionType::ComiteSst, &["CoSS", "Hugo"]);
        add(ActionType::Surveillance, &["Sentinelle", "DiagSST"]);
        add(ActionType::Communication, &["Communication", "CoSS"]);

        Self {
            routes,
            default_route: vec!["Hugo".to_string(), "LexiNorm".to_string()],
        }
    }

    /// Capabilities responsible for an action type.
    ///
    /// Falls back to the default route (never empty) for unmapped types.
    pub fn route(&self, action_type: ActionType) -> &[String] {
        match self.routes.get(&action_type) {
            Some(capabilities) => capabilities,
            None => {
                tracing::debug!(%action_type, "no explicit route, using default capabilities");
                &self.default_route
            }
        }
    }
}

/// A remediation scenario generated for one non-compliant obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScenario {
    /// Fresh scenario identifier.
    pub id: ScenarioId,
    /// Short scenario title.
    pub title: String,
    /// What the scenario corrects.
    pub description: String,
    /// Capabilities responsible for carrying the scenario out.
    pub responsible_capabilities: Vec<String>,
    /// Urgency derived from the obligation severity.
    pub priority: Priority,
    /// Joined citation list backing the scenario.
    pub legislation_context: String,
    /// SCIAN code of the organization, when known.
    pub scian_sector: Option<String>,
    /// Routing category of the underlying obligation.
    pub action_type: ActionType,
    /// Effort estimate inherited from the obligation.
    pub estimated_duration: String,
}

/// An assignable item of the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Fresh item identifier.
    pub id: ActionId,
    /// Short item title.
    pub title: String,
    /// What must be done.
    pub description: String,
    /// Urgency derived from the obligation severity.
    pub priority: Priority,
    /// Capabilities responsible for the item.
    pub responsible_capabilities: Vec<String>,
    /// Representative legal citation.
    pub legal_reference: String,
    /// Effort estimate.
    pub estimated_duration: String,
}

/// Prioritized action plan over the non-compliant obligations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Critical items, to start immediately.
    pub immediate_actions: Vec<ActionItem>,
    /// High-severity items, to start in the coming weeks.
    pub short_term_actions: Vec<ActionItem>,
    /// Remaining items, to schedule.
    pub long_term_actions: Vec<ActionItem>,
}

impl ActionPlan {
    /// Total number of planned items.
    pub fn len(&self) -> usize {
        self.immediate_actions.len() + self.short_term_actions.len() + self.long_term_actions.len()
    }

    /// Whether the plan holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One scenario per non-compliant obligation. Exact partition: compliant
/// obligations yield no scenario.
pub fn generate_contextual_scenarios(
    ctx: &EvaluationContext,
    obligations: &[Obligation],
    router: &CapabilityRouter,
) -> Vec<GeneratedScenario> {
    obligations
        .iter()
        .filter(|o| !o.is_compliant)
        .map(|o| GeneratedScenario {
            id: ScenarioId::new(),
            title: format!("Conformité {} - {}", o.article, o.theme),
            description: format!(
                "Scénario généré pour corriger la non-conformité : {}",
                o.description
            ),
            responsible_capabilities: router.route(o.action_type).to_vec(),
            priority: o.severity.priority(),
            legislation_context: o.legal_refs.join(" + "),
            scian_sector: ctx.scian_code.clone(),
            action_type: o.action_type,
            estimated_duration: o.estimated_duration.clone(),
        })
        .collect()
}

/// Bucket the non-compliant obligations into a prioritized action plan.
pub fn generate_action_plan(obligations: &[Obligation], router: &CapabilityRouter) -> ActionPlan {
    let mut plan = ActionPlan::default();
    for obligation in obligations.iter().filter(|o| !o.is_compliant) {
        let item = ActionItem {
            id: ActionId::new(),
            title: obligation.description.clone(),
            description: format!("{} ({})", obligation.description, obligation.theme),
            priority: obligation.severity.priority(),
            responsible_capabilities: router.route(obligation.action_type).to_vec(),
            legal_reference: obligation.article.clone(),
            estimated_duration: obligation.estimated_duration.clone(),
        };
        match item.priority {
            Priority::Urgent => plan.immediate_actions.push(item),
            Priority::High => plan.short_term_actions.push(item),
            Priority::Medium | Priority::Low => plan.long_term_actions.push(item),
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataforge_core::Severity;

    fn obligation(severity: Severity, is_compliant: bool) -> Obligation {
        Obligation {
            article: "S-2.1,r.4".into(),
            theme: "Chantier".into(),
            description: "Plan de circulation obligatoire".into(),
            action_type: ActionType::Documentation,
            severity,
            estimated_duration: "2 semaines".into(),
            legal_refs: vec!["S-2.1,r.4".into(), "S-2.1,r.5".into()],
            is_compliant,
        }
    }

    fn ctx() -> EvaluationContext {
        EvaluationContext::new("construction").with_scian_code("2362")
    }

    #[test]
    fn scenarios_cover_exactly_the_non_compliant_obligations() {
        let obligations = vec![
            obligation(Severity::Critical, false),
            obligation(Severity::High, true),
            obligation(Severity::Low, false),
        ];
        let scenarios =
            generate_contextual_scenarios(&ctx(), &obligations, &CapabilityRouter::lmrsst());
        assert_eq!(scenarios.len(), 2);
    }

    #[test]
    fn scenario_fields_are_derived_from_the_obligation() {
        let obligations = vec![obligation(Severity::Critical, false)];
        let scenarios =
            generate_contextual_scenarios(&ctx(), &obligations, &CapabilityRouter::lmrsst());
        let scenario = &scenarios[0];
        assert!(scenario.title.contains("S-2.1,r.4"));
        assert!(scenario.title.contains("Chantier"));
        assert_eq!(scenario.priority, Priority::Urgent);
        assert_eq!(scenario.legislation_context, "S-2.1,r.4 + S-2.1,r.5");
        assert_eq!(scenario.scian_sector.as_deref(), Some("2362"));
        assert_eq!(
            scenario.responsible_capabilities,
            vec!["DocuGen", "LexiNorm"]
        );
    }

    #[test]
    fn scenario_ids_are_unique() {
        let obligations = vec![
            obligation(Severity::Critical, false),
            obligation(Severity::Critical, false),
        ];
        let scenarios =
            generate_contextual_scenarios(&ctx(), &obligations, &CapabilityRouter::lmrsst());
        assert_ne!(scenarios[0].id, scenarios[1].id);
    }

    #[test]
    fn compliant_obligations_yield_no_scenarios() {
        let obligations = vec![obligation(Severity::Critical, true)];
        let scenarios =
            generate_contextual_scenarios(&ctx(), &obligations, &CapabilityRouter::lmrsst());
        assert!(scenarios.is_empty());
    }

    #[test]
    fn router_routes_every_action_type() {
        let router = CapabilityRouter::lmrsst();
        for action_type in ActionType::all() {
            assert!(!router.route(*action_type).is_empty());
        }
    }

    #[test]
    fn router_falls_back_to_default() {
        let router =
            CapabilityRouter::new(BTreeMap::new(), vec!["Hugo".into(), "LexiNorm".into()])
                .unwrap();
        assert_eq!(
            router.route(ActionType::Surveillance),
            &["Hugo".to_string(), "LexiNorm".to_string()]
        );
    }

    #[test]
    fn empty_default_route_is_rejected() {
        let result = CapabilityRouter::new(BTreeMap::new(), vec![]);
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyDefaultRoute)
        ));
    }

    #[test]
    fn action_plan_buckets_by_priority() {
        let obligations = vec![
            obligation(Severity::Critical, false),
            obligation(Severity::High, false),
            obligation(Severity::Medium, false),
            obligation(Severity::Low, false),
            obligation(Severity::Critical, true), // compliant, excluded
        ];
        let plan = generate_action_plan(&obligations, &CapabilityRouter::lmrsst());
        assert_eq!(plan.immediate_actions.len(), 1);
        assert_eq!(plan.short_term_actions.len(), 1);
        assert_eq!(plan.long_term_actions.len(), 2);
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn empty_plan_for_fully_compliant_obligations() {
        let obligations = vec![obligation(Severity::High, true)];
        let plan = generate_action_plan(&obligations, &CapabilityRouter::lmrsst());
        assert!(plan.is_empty());
    }

    #[test]
    fn scenario_serde_roundtrip() {
        let obligations = vec![obligation(Severity::High, false)];
        let scenarios =
            generate_contextual_scenarios(&ctx(), &obligations, &CapabilityRouter::lmrsst());
        let json = serde_json::to_string(&scenarios).unwrap();
        let parsed: Vec<GeneratedScenario> = serde_json::from_str(&json).unwrap();
        assert_eq!(scenarios, parsed);
    }
}
