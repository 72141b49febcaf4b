// ============================================================================
// DASHBOARD VIEW - Tabla de órdenes con filtros y paginación
// ============================================================================
// Render puro a partir del AppState: los handlers solo mutan el estado (los
// cambios de filtro/página disparan el fetch via suscripción) o delegan en
// el viewmodel para las acciones de fila.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{append_child, on_change, on_click, select_value, ElementBuilder};
use crate::models::{classify_sla, OrderRow, STATUS_OPTIONS, TYPE_OPTIONS};
use crate::state::{AppState, FilterField, ListState};
use crate::utils::format::format_date_br;
use crate::utils::pagination::{pagination_range, PageItem};
use crate::viewmodels::OrdersViewModel;

/// Vecinos a cada lado de la página actual en el footer
const PAGE_SIBLINGS: u32 = 1;

/// Renderizar el dashboard de órdenes de servicio
pub fn render_dashboard(state: &AppState, vm: &OrdersViewModel) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page-container").build();

    append_child(&page, &render_header(state)?)?;
    append_child(&page, &render_filter_card(state)?)?;
    append_child(&page, &render_table(state, vm)?)?;

    // Footer solo cuando hay resultados
    if state.list.with(|s| s.total_count) > 0 {
        append_child(&page, &render_footer(state)?)?;
    }

    Ok(page)
}

// ----------------------------------------------------------------------
// Header
// ----------------------------------------------------------------------

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("header").build();

    let title = ElementBuilder::new("h2")?.text("Ordens de Serviço").build();
    append_child(&header, &title)?;

    let actions = ElementBuilder::new("div")?.class("header-actions").build();

    if let Some(identity) = state.session.identity() {
        let user = ElementBuilder::new("span")?
            .class("header-user")
            .text(&format!("👤 {}", identity.display_name))
            .build();
        append_child(&actions, &user)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("logout-button")
        .text("Sair")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            state.session.logout();
            crate::rerender_app();
        })?;
    }
    append_child(&actions, &logout)?;

    append_child(&header, &actions)?;
    Ok(header)
}

// ----------------------------------------------------------------------
// Filtros
// ----------------------------------------------------------------------

fn render_filter_card(state: &AppState) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("filter-card").build();
    let grid = ElementBuilder::new("div")?.class("filter-grid").build();

    let filters = state.list.with(|s| s.filters.clone());

    append_child(
        &grid,
        &render_select_filter(state, "Status", FilterField::Status, STATUS_OPTIONS, &filters.status)?,
    )?;
    append_child(
        &grid,
        &render_select_filter(state, "Tipo", FilterField::Type, TYPE_OPTIONS, &filters.order_type)?,
    )?;
    append_child(
        &grid,
        &render_input_filter(state, "Data Inicial", FilterField::DateFrom, "date", &filters.date_from, "")?,
    )?;
    append_child(
        &grid,
        &render_input_filter(state, "Data Final", FilterField::DateTo, "date", &filters.date_to, "")?,
    )?;
    append_child(
        &grid,
        &render_input_filter(state, "Número da O.S", FilterField::Search, "text", &filters.search, "Ex: 2025001")?,
    )?;

    append_child(&card, &grid)?;

    let clear = ElementBuilder::new("button")?
        .class("clear-button")
        .text("✖ Limpar filtros")
        .build();
    {
        let state = state.clone();
        on_click(&clear, move |_| {
            state.clear_filters();
        })?;
    }
    append_child(&card, &clear)?;

    Ok(card)
}

fn render_select_filter(
    state: &AppState,
    label: &str,
    field: FilterField,
    options: &[(&str, &str)],
    current: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("filter-group").build();
    append_child(&group, &ElementBuilder::new("label")?.text(label).build())?;

    let select = ElementBuilder::new("select")?.build();

    // "" = sin restricción
    let all = ElementBuilder::new("option")?.attr("value", "")?.text("Todos").build();
    append_child(&select, &all)?;

    for (value, text) in options {
        let option = ElementBuilder::new("option")?.attr("value", value)?.text(text).build();
        append_child(&select, &option)?;
    }

    // Preservar la selección a través de los re-renders
    if let Some(select_el) = select.dyn_ref::<HtmlSelectElement>() {
        select_el.set_value(current);
    }

    {
        let state = state.clone();
        on_change(&select, move |event| {
            if let Some(target) = event.target() {
                if let Some(value) = select_value(target.unchecked_ref()) {
                    state.apply_filter(field, &value);
                }
            }
        })?;
    }

    append_child(&group, &select)?;
    Ok(group)
}

fn render_input_filter(
    state: &AppState,
    label: &str,
    field: FilterField,
    input_type: &str,
    current: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("filter-group").build();
    append_child(&group, &ElementBuilder::new("label")?.text(label).build())?;

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("value", current)?
        .attr("placeholder", placeholder)?
        .build();

    {
        let state = state.clone();
        // change (no input): un fetch por valor confirmado, no por tecla
        on_change(&input, move |event| {
            if let Some(target) = event.target() {
                if let Some(value) = crate::dom::input_value(target.unchecked_ref()) {
                    state.apply_filter(field, &value);
                }
            }
        })?;
    }

    append_child(&group, &input)?;
    Ok(group)
}

// ----------------------------------------------------------------------
// Tabla
// ----------------------------------------------------------------------

const COLUMNS: &[&str] = &[
    "NÚMERO O.S",
    "TIPO",
    "STATUS",
    "DATA ABERTURA",
    "BENEFICIÁRIO(A)",
    "SLA",
    "AÇÕES",
];

fn render_table(state: &AppState, vm: &OrdersViewModel) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("table-container").build();
    let table = ElementBuilder::new("table")?.build();

    // Encabezado
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for column in COLUMNS {
        append_child(&head_row, &ElementBuilder::new("th")?.text(column).build())?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    // Cuerpo
    let tbody = ElementBuilder::new("tbody")?.build();
    let rows = state.orders.rows();

    if state.orders.is_loading() {
        append_child(&tbody, &render_message_row("Carregando...", "loading")?)?;
    } else if rows.is_empty() {
        append_child(
            &tbody,
            &render_message_row("Nenhuma ordem de serviço encontrada.", "empty")?,
        )?;
    } else {
        for order in &rows {
            append_child(&tbody, &render_order_row(state, vm, order)?)?;
        }
    }

    append_child(&table, &tbody)?;
    append_child(&container, &table)?;
    Ok(container)
}

fn render_message_row(message: &str, class: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    let cell = ElementBuilder::new("td")?
        .class(class)
        .attr("colspan", &COLUMNS.len().to_string())?
        .text(message)
        .build();
    append_child(&row, &cell)?;
    Ok(row)
}

fn render_order_row(state: &AppState, vm: &OrdersViewModel, order: &OrderRow) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    append_child(&row, &ElementBuilder::new("td")?.text(&order.so_number).build())?;

    let type_cell = ElementBuilder::new("td")?.build();
    append_child(&type_cell, &render_badge(&order.type_display, &order.type_code)?)?;
    append_child(&row, &type_cell)?;

    let status_cell = ElementBuilder::new("td")?.build();
    append_child(&status_cell, &render_badge(&order.status_display, &order.status_code)?)?;
    append_child(&row, &status_cell)?;

    append_child(
        &row,
        &ElementBuilder::new("td")?.text(&format_date_br(&order.created_at)).build(),
    )?;
    append_child(&row, &ElementBuilder::new("td")?.text(&order.recipient_name).build())?;

    let sla_cell = ElementBuilder::new("td")?.build();
    append_child(&sla_cell, &render_sla_badge(order)?)?;
    append_child(&row, &sla_cell)?;

    append_child(&row, &render_actions_cell(state, vm, order.id)?)?;
    Ok(row)
}

fn render_badge(text: &str, code: &str) -> Result<Element, JsValue> {
    let badge = ElementBuilder::new("span")?
        .class(&format!("badge {}", code))
        .text(text)
        .build();
    Ok(badge)
}

/// Badge de SLA: fecha de vencimiento + etiqueta según el código del servidor
fn render_sla_badge(order: &OrderRow) -> Result<Element, JsValue> {
    let badge = classify_sla(&order.due_date, &order.sla_status);

    let container = ElementBuilder::new("div")?
        .class(&format!("sla {}", badge.severity.css_class()))
        .build();

    append_child(&container, &ElementBuilder::new("span")?.text(&badge.due_label).build())?;

    let icon = match badge.severity {
        crate::models::SlaSeverity::OnTime => "✅",
        _ => "⚠️",
    };
    let label = ElementBuilder::new("span")?
        .text(&format!("{} {}", icon, badge.status_label))
        .build();
    append_child(&container, &label)?;

    Ok(container)
}

fn render_actions_cell(state: &AppState, vm: &OrdersViewModel, order_id: u64) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?.class("actions").build();

    // Edición: enlace al formulario (fuera del alcance de este dashboard)
    let edit = ElementBuilder::new("a")?
        .attr("href", &format!("#/ordens-servico/editar/{}", order_id))?
        .attr("title", "Editar")?
        .text("✏️")
        .build();
    append_child(&cell, &edit)?;

    let delete = ElementBuilder::new("button")?
        .attr("title", "Deletar")?
        .text("🗑️")
        .build();
    {
        let state = state.clone();
        let vm = vm.clone();
        on_click(&delete, move |_| {
            vm.delete_order(&state, order_id);
        })?;
    }
    append_child(&cell, &delete)?;

    Ok(cell)
}

// ----------------------------------------------------------------------
// Footer de paginación
// ----------------------------------------------------------------------

fn render_footer(state: &AppState) -> Result<Element, JsValue> {
    let snapshot: ListState = state.list.get();
    let total_pages = snapshot.total_pages();

    let footer = ElementBuilder::new("footer")?.class("footer").build();

    let info = ElementBuilder::new("span")?
        .class("page-info")
        .text(&format!(
            "Mostrando {} a {} de {} resultados",
            snapshot.first_item(),
            snapshot.last_item(),
            snapshot.total_count
        ))
        .build();
    append_child(&footer, &info)?;

    let nav = ElementBuilder::new("nav")?
        .class("pagination")
        .attr("aria-label", "Navegação de paginação")?
        .build();

    append_child(
        &nav,
        &render_page_button(state, "‹", snapshot.page.wrapping_sub(1), snapshot.page == 1, false)?,
    )?;

    for item in pagination_range(total_pages, snapshot.page, PAGE_SIBLINGS) {
        match item {
            PageItem::Dots => {
                let dots = ElementBuilder::new("span")?.class("pagination-dots").text("…").build();
                append_child(&nav, &dots)?;
            }
            PageItem::Page(n) => {
                append_child(
                    &nav,
                    &render_page_button(state, &n.to_string(), n, false, n == snapshot.page)?,
                )?;
            }
        }
    }

    append_child(
        &nav,
        &render_page_button(state, "›", snapshot.page + 1, snapshot.page == total_pages, false)?,
    )?;

    append_child(&footer, &nav)?;
    Ok(footer)
}

fn render_page_button(
    state: &AppState,
    label: &str,
    target_page: u32,
    disabled: bool,
    active: bool,
) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("button")?;
    if active {
        builder = builder.class("active").attr("aria-current", "page")?;
    }
    if disabled {
        builder = builder.attr("disabled", "")?;
    }
    let button = builder.text(label).build();

    if !disabled {
        let state = state.clone();
        on_click(&button, move |_| {
            // set_page rechaza los fuera de rango sin disparar nada
            state.set_page(target_page);
        })?;
    }

    Ok(button)
}
