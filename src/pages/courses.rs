use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::label_for;
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::models::{Collection, Course};
use crate::resource::ListResource;

pub const COURSE_CATEGORIES: &[(&str, &str)] = &[
    ("Programare", "Programare"),
    ("Robotica", "Robotică"),
    ("Art", "Art & Design"),
    ("Limbi Straine", "Limbi Străine"),
    ("Personal", "Dezvoltare Personală"),
];

pub const COURSE_LEVELS: &[(&str, &str)] = &[
    ("Incepator", "Începător"),
    ("Mediu", "Mediu"),
    ("Avansat", "Avansat"),
    ("Expert", "Expert"),
];

pub fn course_form() -> FormSpec {
    FormSpec::new(Collection::Courses, "Curs Nou", "Editare Curs")
        .field(FieldSpec::new("nume_curs", "Nume Curs", FieldKind::Text).required())
        .field(
            FieldSpec::new("categorie", "Categorie", FieldKind::Choice(COURSE_CATEGORIES))
                .default_value("Programare"),
        )
        .field(
            FieldSpec::new("nivel_dificultate", "Nivel", FieldKind::Choice(COURSE_LEVELS))
                .default_value("Incepator"),
        )
        .field(FieldSpec::new("varsta_min", "Vârstă minimă", FieldKind::Integer { optional: true }))
        .field(FieldSpec::new("varsta_max", "Vârstă maximă", FieldKind::Integer { optional: true }))
        .field(FieldSpec::new("programa_link", "Link Programă", FieldKind::Url).placeholder("https://..."))
        .field(FieldSpec::new("descriere", "Descriere", FieldKind::TextArea))
}

/// `"7 - 10 ani"`, open-ended when one bound is missing.
pub fn age_range(min: Option<i32>, max: Option<i32>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{} - {} ani", lo, hi),
        (Some(lo), None) => format!("{}+ ani", lo),
        (None, Some(hi)) => format!("până la {} ani", hi),
        (None, None) => "-".to_string(),
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = ListResource::<Course>::load(Collection::Courses);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| courses.reload());

    let rows = move || {
        courses
            .items
            .get()
            .into_iter()
            .map(|c| {
                let id = c.id;
                let prompt = format!("Ștergi cursul \"{}\"?", c.nume_curs);
                let edit = DialogMode::edit(id, &c);
                let category = c.categorie.as_deref().map(|v| label_for(COURSE_CATEGORIES, v));
                let level = c.nivel_dificultate.as_deref().map(|v| label_for(COURSE_LEVELS, v));
                view! {
                    <tr>
                        <td class="cell-strong">{c.nume_curs}</td>
                        <td>{category.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{level.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{age_range(c.varsta_min, c.varsta_max)}</td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| courses.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Cursuri"
                noun="cursuri"
                count=Signal::derive(move || courses.count())
                add_label="+ Curs Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Curs", "Categorie", "Nivel", "Vârstă", ""]
                loading=courses.loading
                error=courses.error
                empty=Signal::derive(move || courses.is_empty())
                empty_text="Nu există cursuri."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=course_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_range() {
        assert_eq!(age_range(Some(7), Some(10)), "7 - 10 ani");
        assert_eq!(age_range(Some(12), None), "12+ ani");
        assert_eq!(age_range(None, None), "-");
    }

    #[test]
    fn test_empty_ages_are_null() {
        let form = course_form();
        let mut values = form.initial_values(None);
        values.insert("nume_curs".to_string(), "Scratch".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert!(payload["varsta_min"].is_null());
        assert_eq!(payload["categorie"], "Programare");
    }
}
