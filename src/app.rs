use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::catalog::CatalogPage;
use crate::pages::contracts::ContractsPage;
use crate::pages::courses::CoursesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::enrollments::EnrollmentsPage;
use crate::pages::groups::GroupsPage;
use crate::pages::inventory::InventoryPage;
use crate::pages::invoices::InvoicesPage;
use crate::pages::leads::LeadsPage;
use crate::pages::partners::PartnersPage;
use crate::pages::sessions::SessionsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::students::StudentsPage;
use crate::pages::teachers::TeachersPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p class="empty-state">"Pagina nu a fost găsită."</p> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/parteneri") view=PartnersPage />
                        <Route path=path!("/leaduri") view=LeadsPage />
                        <Route path=path!("/contracte") view=ContractsPage />
                        <Route path=path!("/profesori") view=TeachersPage />
                        <Route path=path!("/cursuri") view=CoursesPage />
                        <Route path=path!("/elevi") view=StudentsPage />
                        <Route path=path!("/grupe") view=GroupsPage />
                        <Route path=path!("/sesiuni") view=SessionsPage />
                        <Route path=path!("/financiar") view=InvoicesPage />
                        <Route path=path!("/inscrieri") view=EnrollmentsPage />
                        <Route path=path!("/catalog") view=CatalogPage />
                        <Route path=path!("/inventar") view=InventoryPage />
                        <Route path=path!("/setari") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
