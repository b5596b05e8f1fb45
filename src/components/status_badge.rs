use leptos::prelude::*;

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Red,
    Gray,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Green => "badge badge-green",
            Tone::Blue => "badge badge-blue",
            Tone::Yellow => "badge badge-yellow",
            Tone::Orange => "badge badge-orange",
            Tone::Purple => "badge badge-purple",
            Tone::Red => "badge badge-red",
            Tone::Gray => "badge badge-gray",
        }
    }
}

#[component]
pub fn StatusBadge(
    /// Text shown inside the badge
    #[prop(into)]
    label: String,
    tone: Tone,
) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

pub fn partner_status_tone(status: &str) -> Tone {
    match status {
        "activ" => Tone::Green,
        "potential" => Tone::Blue,
        "blacklist" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn lead_status_tone(status: &str) -> Tone {
    match status {
        "nou" => Tone::Blue,
        "contactat" => Tone::Yellow,
        "calificat" | "ofertat" => Tone::Purple,
        "convertit" => Tone::Green,
        "pierdut" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn contract_status_tone(status: &str) -> Tone {
    match status {
        "activ" => Tone::Green,
        "draft" => Tone::Yellow,
        "expirat" | "anulat" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn group_status_tone(status: &str) -> Tone {
    match status {
        "activa" => Tone::Green,
        "planificata" => Tone::Blue,
        "anulata" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn session_status_tone(status: &str) -> Tone {
    match status {
        "realizata" => Tone::Green,
        "anulata" => Tone::Red,
        _ => Tone::Blue,
    }
}

pub fn enrollment_status_tone(status: &str) -> Tone {
    match status {
        "activ" => Tone::Green,
        "in_asteptare" => Tone::Yellow,
        "retras" => Tone::Red,
        _ => Tone::Gray,
    }
}

pub fn invoice_status_tone(status: &str) -> Tone {
    match status {
        "platita_integral" => Tone::Green,
        "platita_partial" => Tone::Yellow,
        "emisa" => Tone::Blue,
        "scadenta_depasita" => Tone::Red,
        "anulata" => Tone::Gray,
        _ => Tone::Gray,
    }
}

/// B2B when the school pays, B2C when parents pay.
pub fn payer_badge(tip_plata_grupa: &str) -> (&'static str, Tone) {
    match tip_plata_grupa {
        "plateste_scoala" => ("B2B", Tone::Purple),
        "plateste_parintii" => ("B2C", Tone::Blue),
        _ => ("Mixt", Tone::Orange),
    }
}

pub fn active_badge(active: bool) -> (&'static str, Tone) {
    if active {
        ("Activ", Tone::Green)
    } else {
        ("Inactiv", Tone::Gray)
    }
}

pub fn gdpr_badge(accepted: bool) -> (&'static str, Tone) {
    if accepted {
        ("GDPR OK", Tone::Green)
    } else {
        ("Lipsă GDPR", Tone::Red)
    }
}

/// Display text for an enum value: the matching label, or the raw value.
pub fn label_for(options: &[(&str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, l)| l.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        assert_eq!(partner_status_tone("activ"), Tone::Green);
        assert_eq!(lead_status_tone("pierdut"), Tone::Red);
        assert_eq!(invoice_status_tone("scadenta_depasita"), Tone::Red);
        assert_eq!(session_status_tone("planificata"), Tone::Blue);
        assert_eq!(group_status_tone("necunoscut"), Tone::Gray);
    }

    #[test]
    fn test_payer_badge() {
        assert_eq!(payer_badge("plateste_scoala").0, "B2B");
        assert_eq!(payer_badge("plateste_parintii").0, "B2C");
        assert_eq!(payer_badge("mixt").0, "Mixt");
    }

    #[test]
    fn test_label_for_falls_back_to_value() {
        let opts = [("activ", "Activ"), ("retras", "Retras")];
        assert_eq!(label_for(&opts, "retras"), "Retras");
        assert_eq!(label_for(&opts, "altceva"), "altceva");
    }
}
