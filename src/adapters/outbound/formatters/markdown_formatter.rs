use crate::application::read_models::{
    CatalogPageView, ControlPanelView, FacetPanelView, ItemCardView, ItemDetailView, PanelPage,
};
use crate::catalog::domain::ViewMode;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Marker appended to NEW facts and sections while highlights are on
const HIGHLIGHT_MARK: &str = " ✨";

/// Marker shown on cards while favoriting is on
const FAVORITE_MARK: &str = " ☆";

/// Cards per row in grid mode
const GRID_COLUMNS: usize = 2;

/// MarkdownFormatter adapter for rendering the catalog views as Markdown
///
/// This adapter implements the CatalogFormatter port. Each view renders as
/// a standalone document.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn checkbox(checked: bool) -> &'static str {
        if checked {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn render_summary(&self, output: &mut String, view: &CatalogPageView) {
        output.push_str(&format!(
            "Showing {} - {} of {} results · Page {} of {} · {} per page · Sort: {} · View: {}\n\n",
            view.first_position,
            view.last_position,
            view.total,
            view.page,
            view.page_count.max(1),
            view.page_size,
            view.sort,
            view.view_mode
        ));
    }

    fn render_chips(&self, output: &mut String, view: &CatalogPageView) {
        if view.chips.is_empty() {
            return;
        }
        let chips: Vec<String> = view
            .chips
            .iter()
            .map(|chip| format!("`{}`", chip.label))
            .collect();
        output.push_str(&format!("Active filters: {}\n\n", chips.join(" ")));
    }

    fn render_filter_panel(&self, output: &mut String, panel: &[FacetPanelView]) {
        output.push_str("## Filters\n\n");
        for facet in panel {
            match &facet.search {
                Some(search) if !search.is_empty() => {
                    output.push_str(&format!("### {} (search: \"{}\")\n\n", facet.label, search))
                }
                _ => output.push_str(&format!("### {}\n\n", facet.label)),
            }
            if facet.options.is_empty() {
                output.push_str("_No matching options_\n\n");
                continue;
            }
            for option in &facet.options {
                output.push_str(&format!(
                    "- {} {}\n",
                    Self::checkbox(option.selected),
                    option.value
                ));
            }
            output.push('\n');
        }
    }

    fn card_title(card: &ItemCardView) -> String {
        let favorite = if card.favorite { FAVORITE_MARK } else { "" };
        format!("{} {}{}", card.logo, card.name, favorite)
            .trim()
            .to_string()
    }

    fn card_facts(card: &ItemCardView) -> Vec<String> {
        let mut facts = Vec::new();
        if !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|tag| format!("`{}`", tag)).collect();
            facts.push(format!("Tags: {}", tags.join(" ")));
        }
        if let Some(provider) = &card.provider {
            facts.push(format!("Provider: {}", provider));
        }
        if let Some(published) = &card.published {
            facts.push(format!("Published {}", published));
        }
        facts
    }

    fn render_list(&self, output: &mut String, cards: &[ItemCardView]) {
        for card in cards {
            output.push_str(&format!("### {}\n\n", Self::card_title(card)));
            if !card.description.is_empty() {
                output.push_str(&format!("{}\n\n", card.description));
            }
            for fact in Self::card_facts(card) {
                output.push_str(&format!("- {}\n", fact));
            }
            output.push('\n');
        }
    }

    fn render_grid(&self, output: &mut String, cards: &[ItemCardView]) {
        output.push_str(&format!("|{}\n", " |".repeat(GRID_COLUMNS)));
        output.push_str(&format!("|{}\n", "---|".repeat(GRID_COLUMNS)));
        for row in cards.chunks(GRID_COLUMNS) {
            output.push('|');
            for column in 0..GRID_COLUMNS {
                let cell = row
                    .get(column)
                    .map(|card| {
                        let mut lines = vec![format!("**{}**", Self::card_title(card))];
                        if !card.description.is_empty() {
                            lines.push(card.description.clone());
                        }
                        lines.extend(Self::card_facts(card));
                        Self::escape_markdown_table_cell(&lines.join("<br>"))
                    })
                    .unwrap_or_default();
                output.push_str(&format!(" {} |", cell));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn fact_line(label: &str, value: &str, highlighted: bool) -> String {
        let mark = if highlighted { HIGHLIGHT_MARK } else { "" };
        format!("- **{}:** {}{}\n", label, value, mark)
    }

    fn render_detail_header(&self, output: &mut String, view: &ItemDetailView) {
        output.push_str(&format!("# {} {}\n\n", view.logo, view.name).replacen("#  ", "# ", 1));
        if !view.description.is_empty() {
            output.push_str(&format!("{}\n\n", view.description));
        }
        if !view.tags.is_empty() {
            let tags: Vec<String> = view.tags.iter().map(|tag| format!("`{}`", tag)).collect();
            output.push_str(&format!("Tags: {}\n\n", tags.join(" ")));
        }

        output.push_str(&Self::fact_line("Image", &view.image, false));
        for fact in &view.facts {
            output.push_str(&Self::fact_line(&fact.label, &fact.value, fact.highlighted));
        }
        if let Some(panel) = &view.cve_panel {
            output.push_str(&Self::fact_line(
                "CVEs",
                &format!(
                    "{} critical · {} high · {} medium · {} low ({})",
                    panel.counts.critical,
                    panel.counts.high,
                    panel.counts.medium,
                    panel.counts.low,
                    panel.scanned
                ),
                panel.highlighted,
            ));
        }
        if let Some(url) = &view.upstream_url {
            output.push_str(&Self::fact_line("Upstream", url, false));
        }
        output.push('\n');
    }

    fn render_configuration(&self, output: &mut String, view: &ItemDetailView) {
        let config = &view.configuration;
        output.push_str("## Configuration\n\n");
        let published = config
            .last_published
            .as_deref()
            .map(|label| format!(" · last published {}", label))
            .unwrap_or_default();
        output.push_str(&format!(
            "- **Tag:** {} (`{}`){}\n",
            config.tag_label, config.tag, published
        ));
        output.push_str(&format!("- **Compliance:** {}\n", config.compliance.label()));
        output.push_str(&format!(
            "- {} Package manager\n- {} Shell\n- {} Go tools\n",
            Self::checkbox(config.package_manager),
            Self::checkbox(config.shell),
            Self::checkbox(config.toolchain)
        ));
        if !config.options_enabled {
            output.push_str("\n_Image options are disabled on version tags._\n");
        }
        output.push('\n');

        if view.tag_search.is_empty() {
            output.push_str("### Available tags\n\n");
        } else {
            output.push_str(&format!("### Available tags (search: \"{}\")\n\n", view.tag_search));
        }
        if view.tag_options.is_empty() {
            output.push_str("_No matching tags_\n\n");
        } else {
            output.push_str("| Tag | Label | Last published |\n|-----|-------|----------------|\n");
            for option in &view.tag_options {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(option.value.value()),
                    Self::escape_markdown_table_cell(&option.label),
                    option.last_published.as_deref().unwrap_or("N/A")
                ));
            }
            output.push('\n');
        }
    }

    fn render_jump_links(&self, output: &mut String, view: &ItemDetailView) {
        output.push_str("## Jump to section\n\n");
        for link in &view.jump_links {
            if link.active {
                output.push_str(&format!("- **[{}](#{})** ◀\n", link.title, link.id));
            } else {
                output.push_str(&format!("- [{}](#{})\n", link.title, link.id));
            }
        }
        output.push('\n');
    }

    fn render_sections(&self, output: &mut String, view: &ItemDetailView) {
        for section in &view.sections {
            let mark = if section.highlighted { HIGHLIGHT_MARK } else { "" };
            output.push_str(&format!("## {}{}\n\n", section.title, mark));
            for line in &section.body {
                output.push_str(&format!("- {}\n", line));
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format_catalog(&self, view: &CatalogPageView) -> Result<String> {
        let mut output = String::from("# Catalog\n\n");
        self.render_summary(&mut output, view);
        self.render_chips(&mut output, view);
        if let Some(panel) = &view.filter_panel {
            self.render_filter_panel(&mut output, panel);
        }

        output.push_str("## Results\n\n");
        if view.past_end {
            output.push_str(&format!(
                "_Page {} is past the last page ({}). Go back to page 1._\n",
                view.page, view.page_count
            ));
            return Ok(output);
        }
        if view.is_empty() {
            output.push_str("_No results found. Try adjusting your filters._\n");
            return Ok(output);
        }
        match view.view_mode {
            ViewMode::List => self.render_list(&mut output, &view.cards),
            ViewMode::Grid => self.render_grid(&mut output, &view.cards),
        }
        Ok(output)
    }

    fn format_detail(&self, view: &ItemDetailView) -> Result<String> {
        let mut output = String::new();
        self.render_detail_header(&mut output, view);
        self.render_configuration(&mut output, view);

        output.push_str("## Pull\n\n```sh\n");
        for command in &view.pull_commands {
            output.push_str(command);
            output.push('\n');
        }
        output.push_str("```\n\n");

        self.render_jump_links(&mut output, view);
        self.render_sections(&mut output, view);
        Ok(output)
    }

    fn format_control_panel(&self, view: &ControlPanelView) -> Result<String> {
        let page = match view.page {
            PanelPage::Catalog => "catalog page",
            PanelPage::Detail => "detail page",
        };
        let mut output = format!("# Feature toggles ({})\n\n", page);
        for group in &view.groups {
            output.push_str(&format!("## {}\n\n", group.title));
            for entry in &group.entries {
                let indent = if entry.nested { "  " } else { "" };
                output.push_str(&format!(
                    "{}- {} {} (`{}`)\n",
                    indent,
                    Self::checkbox(entry.enabled),
                    entry.label,
                    entry.key
                ));
            }
            output.push('\n');
        }
        output.push_str(&format!(
            "Highlights: {}\n",
            if view.highlights_active { "on" } else { "off" }
        ));
        Ok(output)
    }
}
