// ============================================================================
// SLA CLASSIFIER - Clasificación de vencimiento para mostrar en la tabla
// ============================================================================
// La autoridad sobre el SLA es del servidor: aquí solo mapeamos el código
// recibido a una categoría de display. La fecha se usa únicamente para
// formatear, nunca para recalcular la clasificación.
// ============================================================================

use crate::utils::format::format_date_br;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlaSeverity {
    OnTime,
    Nearing,
    Overdue,
}

impl SlaSeverity {
    /// Clase CSS del badge
    pub fn css_class(&self) -> &'static str {
        match self {
            SlaSeverity::OnTime => "on-time",
            SlaSeverity::Nearing => "nearing",
            SlaSeverity::Overdue => "overdue",
        }
    }
}

/// Badge de SLA listo para renderizar
#[derive(Clone, PartialEq, Debug)]
pub struct SlaBadge {
    pub due_label: String,
    pub status_label: &'static str,
    pub severity: SlaSeverity,
}

/// Mapear el código de SLA del servidor a una categoría de display.
/// Cualquier código desconocido cuenta como "en plazo".
pub fn classify_sla(due_date: &str, sla_status: &str) -> SlaBadge {
    let severity = match sla_status {
        "overdue" => SlaSeverity::Overdue,
        "nearing_due_date" => SlaSeverity::Nearing,
        _ => SlaSeverity::OnTime,
    };

    let status_label = match severity {
        SlaSeverity::Overdue => "Vencido",
        SlaSeverity::Nearing => "Próx. vencimento",
        SlaSeverity::OnTime => "No prazo",
    };

    SlaBadge {
        due_label: format_date_br(due_date),
        status_label,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_code_maps_to_overdue() {
        let badge = classify_sla("2025-01-15", "overdue");
        assert_eq!(badge.severity, SlaSeverity::Overdue);
        assert_eq!(badge.status_label, "Vencido");
        assert_eq!(badge.due_label, "15/01/2025");
    }

    #[test]
    fn nearing_code_maps_to_nearing() {
        let badge = classify_sla("2025-06-01", "nearing_due_date");
        assert_eq!(badge.severity, SlaSeverity::Nearing);
        assert_eq!(badge.status_label, "Próx. vencimento");
    }

    #[test]
    fn any_other_code_is_on_time() {
        for code in ["open", "on_time", "", "whatever"] {
            let badge = classify_sla("2025-06-01", code);
            assert_eq!(badge.severity, SlaSeverity::OnTime, "code: {code}");
            assert_eq!(badge.status_label, "No prazo");
        }
    }

    #[test]
    fn date_is_only_formatted_never_reclassified() {
        // Una fecha claramente pasada sigue "en plazo" si el servidor lo dice
        let badge = classify_sla("1999-12-31", "open");
        assert_eq!(badge.severity, SlaSeverity::OnTime);
        assert_eq!(badge.due_label, "31/12/1999");
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        let badge = classify_sla("sin-fecha", "overdue");
        assert_eq!(badge.due_label, "sin-fecha");
        assert_eq!(badge.severity, SlaSeverity::Overdue);
    }
}
