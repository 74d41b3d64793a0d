//! Admin console page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four tab sections share one `AdminState`. Only the active section carries
//! the `active` class. Categories are fetched once on mount so the
//! add-product dropdown is populated before any tab is opened.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::actions::refresh::spawn_reload;
use crate::components::category_form::AddCategoryForm;
use crate::components::category_list::CategoryList;
use crate::components::product_editor::ProductEditorModal;
use crate::components::product_form::AddProductForm;
use crate::components::product_list::ProductList;
use crate::components::tab_bar::TabBar;
use crate::state::admin::{AdminState, AdminTab, ListKind};

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = RwSignal::new(AdminState::default());
    provide_context(admin);

    Effect::new(move || spawn_reload(admin, ListKind::Categories));

    let section_class = move |tab: AdminTab| move || admin.get().is_active(tab);

    view! {
        <Title text="Catalog admin"/>
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Catalog admin"</h1>
                <a href="/" rel="external">"Storefront"</a>
            </header>
            <TabBar/>

            <section id=AdminTab::AddProduct.dom_id() class="tab-content" class:active=section_class(AdminTab::AddProduct)>
                <h2>"Add product"</h2>
                <AddProductForm/>
            </section>
            <section id=AdminTab::AddCategory.dom_id() class="tab-content" class:active=section_class(AdminTab::AddCategory)>
                <h2>"Add category"</h2>
                <AddCategoryForm/>
            </section>
            <section
                id=AdminTab::ManageProducts.dom_id()
                class="tab-content"
                class:active=section_class(AdminTab::ManageProducts)
            >
                <h2>"Manage products"</h2>
                <ProductList/>
            </section>
            <section
                id=AdminTab::ManageCategories.dom_id()
                class="tab-content"
                class:active=section_class(AdminTab::ManageCategories)
            >
                <h2>"Manage categories"</h2>
                <CategoryList/>
            </section>

            <ProductEditorModal/>
        </div>
    }
}
