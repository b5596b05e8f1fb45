use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{group_status_tone, label_for, payer_badge, StatusBadge};
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::lookup::{resolve_name, resolve_optional};
use crate::models::{Collection, Contract, Course, Group, Teacher};
use crate::resource::ListResource;

pub const GROUP_STATUSES: &[(&str, &str)] = &[
    ("planificata", "Planificată"),
    ("activa", "Activă (În curs)"),
    ("incheiata", "Încheiată"),
    ("anulata", "Anulată"),
];

pub const PAYERS: &[(&str, &str)] = &[
    ("plateste_parintii", "Părinții (Taxă lunară)"),
    ("plateste_scoala", "Școala (Factură B2B)"),
    ("mixt", "Mixt"),
];

pub fn group_form() -> FormSpec {
    FormSpec::new(Collection::Groups, "Grupă Nouă", "Editare Grupă")
        .field(FieldSpec::new("nume_grupa", "Nume Grupă", FieldKind::Text).required())
        .field(
            FieldSpec::new(
                "curs_id",
                "Curs",
                FieldKind::Reference { collection: Collection::Courses, none_label: None },
            )
            .required(),
        )
        .field(
            FieldSpec::new(
                "profesor_titular_id",
                "Profesor Titular",
                FieldKind::Reference { collection: Collection::Teachers, none_label: None },
            )
            .required(),
        )
        .field(FieldSpec::new(
            "contract_id",
            "Contract Cadru (Opțional)",
            FieldKind::Reference {
                collection: Collection::Contracts,
                none_label: Some("Niciun contract (Direct cu părinții)"),
            },
        ))
        .field(
            FieldSpec::new("max_copii", "Max. Copii", FieldKind::Integer { optional: true })
                .default_value("10"),
        )
        .field(FieldSpec::new("data_inceput", "Data Început", FieldKind::Date { optional: true }))
        .field(FieldSpec::new("data_sfarsit", "Data Sfârșit", FieldKind::Date { optional: true }))
        .field(
            FieldSpec::new("status_grupa", "Status Grupă", FieldKind::Choice(GROUP_STATUSES))
                .default_value("planificata"),
        )
        .field(
            FieldSpec::new("tip_plata_grupa", "Cine plătește?", FieldKind::Choice(PAYERS))
                .default_value("plateste_parintii"),
        )
}

#[component]
pub fn GroupsPage() -> impl IntoView {
    let groups = ListResource::<Group>::load(Collection::Groups);
    let courses = ListResource::<Course>::load(Collection::Courses);
    let teachers = ListResource::<Teacher>::load(Collection::Teachers);
    let contracts = ListResource::<Contract>::load(Collection::Contracts);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| groups.reload());

    let rows = move || {
        let course_list = courses.items.get();
        let teacher_list = teachers.items.get();
        let contract_list = contracts.items.get();
        groups
            .items
            .get()
            .into_iter()
            .map(|g| {
                let id = g.id;
                let course = resolve_name(&course_list, g.curs_id, "Necunoscut");
                let teacher = resolve_name(&teacher_list, g.profesor_titular_id, "Fără Profesor");
                let contract = resolve_optional(&contract_list, g.contract_id, "Direct", "ID Inexistent");
                let (payer_label, payer_tone) = payer_badge(&g.tip_plata_grupa);
                let prompt = format!("Ștergi grupa \"{}\"?", g.nume_grupa);
                let edit = DialogMode::edit(id, &g);
                let capacity = g.max_copii.map(|m| format!("max. {} copii", m)).unwrap_or_default();
                view! {
                    <tr>
                        <td>
                            <div class="cell-strong">{g.nume_grupa}</div>
                            <div class="cell-muted">{capacity}</div>
                        </td>
                        <td>{course}</td>
                        <td>{teacher}</td>
                        <td><StatusBadge label=payer_label tone=payer_tone /></td>
                        <td>{contract}</td>
                        <td>
                            <StatusBadge label=label_for(GROUP_STATUSES, &g.status_grupa) tone=group_status_tone(&g.status_grupa) />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| groups.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Grupe"
                noun="grupe"
                count=Signal::derive(move || groups.count())
                add_label="+ Grupă Nouă"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Grupă", "Curs", "Profesor", "Plătitor", "Contract", "Status", ""]
                loading=groups.loading
                error=groups.error
                empty=Signal::derive(move || groups.is_empty())
                empty_text="Nu există grupe."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=group_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_group_has_null_contract() {
        let form = group_form();
        let mut values = form.initial_values(None);
        values.insert("nume_grupa".to_string(), "Lego Joi".to_string());
        values.insert("curs_id".to_string(), "1".to_string());
        values.insert("profesor_titular_id".to_string(), "2".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert!(payload["contract_id"].is_null());
        assert_eq!(payload["max_copii"], 10);
        assert_eq!(payload["status_grupa"], "planificata");
    }

    #[test]
    fn test_edit_preserves_notes() {
        let form = group_form();
        let record = json!({
            "id": 9, "nume_grupa": "Lego Joi", "contract_id": 4, "curs_id": 1,
            "profesor_titular_id": 2, "max_copii": 8, "data_inceput": null,
            "data_sfarsit": null, "status_grupa": "activa",
            "tip_plata_grupa": "plateste_scoala", "note": "Sala mare"
        });
        let record = record.as_object().unwrap();
        let values = form.initial_values(Some(record));
        assert_eq!(values["contract_id"], "4");
        let payload = form.build_payload(&values, Some(record)).unwrap();
        assert_eq!(payload["note"], "Sala mare");
        assert_eq!(payload["contract_id"], 4);
    }
}
