//! Style selection screen.
//!
//! Lets the user pick a map style and color variant, tune the detail and
//! label levels, and toggle the transit, bike and walking overlays.
//! Overlay switches write through to the [`MapController`] immediately; the
//! style is only written to [`AppSettings`] when the user saves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, info};

use crate::constants::NOT_APPLICABLE;
use crate::models::{AppSettings, MapController, StyleCatalog, StyleSheet, NO_COLOR_STYLE_NAME};

use super::component::ContextualComponent;
use super::level_field::LevelField;
use super::picker::PickerState;
use super::Theme;

/// Live application state the screen reads from and writes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScreenContext {
    /// Overlay flags of the live map
    pub map_controller: MapController,
    /// Stored settings, overwritten on save
    pub app_settings: AppSettings,
}

impl StyleScreenContext {
    /// Bundles the map controller and settings for the screen.
    #[must_use]
    pub const fn new(map_controller: MapController, app_settings: AppSettings) -> Self {
        Self {
            map_controller,
            app_settings,
        }
    }
}

/// Focusable widgets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    /// Style picker wheel
    StylePicker,
    /// Color picker wheel
    ColorPicker,
    /// Level of detail text field
    DetailLevel,
    /// Label density text field
    LabelLevel,
    /// Transit overlay switch
    TransitOverlay,
    /// Bike overlay switch
    BikeOverlay,
    /// Walking path overlay switch
    WalkingOverlay,
}

impl FocusField {
    /// All fields in tab order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::StylePicker,
            Self::ColorPicker,
            Self::DetailLevel,
            Self::LabelLevel,
            Self::TransitOverlay,
            Self::BikeOverlay,
            Self::WalkingOverlay,
        ]
    }

    /// Returns display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::StylePicker => "Style",
            Self::ColorPicker => "Color",
            Self::DetailLevel => "Level of Detail",
            Self::LabelLevel => "Label Density",
            Self::TransitOverlay => "Transit",
            Self::BikeOverlay => "Bike",
            Self::WalkingOverlay => "Walking",
        }
    }

    fn position(self) -> usize {
        Self::all().iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    /// Previous field, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// Which numeric level a text field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// `detail_level`
    Detail,
    /// `label_level`
    Label,
}

/// Events emitted by the style screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleScreenEvent {
    /// Selection written to the app settings; screen closed
    Saved,
    /// Screen closed without writing the style
    Cancelled,
}

/// Which sheet is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveStyle {
    /// The sheet handed over by the app settings
    Loaded,
    /// A catalog entry, by row
    Catalog(usize),
}

/// The style selection screen.
#[derive(Debug, Clone)]
pub struct StyleSelectionScreen {
    catalog: StyleCatalog,
    loaded: StyleSheet,
    active: ActiveStyle,
    style_picker: PickerState,
    color_picker: PickerState,
    detail_field: LevelField,
    label_field: LevelField,
    transit_switch: bool,
    bike_switch: bool,
    walking_switch: bool,
    focus: FocusField,
    closed: bool,
}

impl StyleSelectionScreen {
    /// Builds the screen from the live map and stored settings.
    #[must_use]
    pub fn new(context: &StyleScreenContext) -> Self {
        let map = &context.map_controller;
        let mut screen = Self {
            catalog: StyleCatalog::new(),
            loaded: context.app_settings.selected_style.clone(),
            active: ActiveStyle::Loaded,
            style_picker: PickerState::new(),
            color_picker: PickerState::new(),
            detail_field: LevelField::default(),
            label_field: LevelField::default(),
            transit_switch: map.show_transit_overlay,
            bike_switch: map.show_bike_overlay,
            walking_switch: map.show_walking_path_overlay,
            focus: FocusField::StylePicker,
            closed: false,
        };
        screen.set_ui_state_for_style();
        screen.on_appear();
        screen
    }

    /// The sheet currently being edited.
    #[must_use]
    pub fn active_style(&self) -> &StyleSheet {
        match self.active {
            ActiveStyle::Catalog(row) => self.catalog.get(row).unwrap_or(&self.loaded),
            ActiveStyle::Loaded => &self.loaded,
        }
    }

    fn active_style_mut(&mut self) -> &mut StyleSheet {
        match self.active {
            ActiveStyle::Catalog(row) => match self.catalog.get_mut(row) {
                Some(style) => style,
                None => &mut self.loaded,
            },
            ActiveStyle::Loaded => &mut self.loaded,
        }
    }

    /// The styles offered by the picker.
    #[must_use]
    pub const fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Currently focused widget.
    #[must_use]
    pub const fn focus(&self) -> FocusField {
        self.focus
    }

    /// Moves focus to `field`.
    pub fn set_focus(&mut self, field: FocusField) {
        self.focus = field;
    }

    /// Selected row of the style picker.
    #[must_use]
    pub const fn selected_style_row(&self) -> usize {
        self.style_picker.selected
    }

    /// Selected row of the color picker.
    #[must_use]
    pub const fn selected_color_row(&self) -> usize {
        self.color_picker.selected
    }

    /// Text field for a level.
    #[must_use]
    pub const fn level_field(&self, kind: LevelKind) -> &LevelField {
        match kind {
            LevelKind::Detail => &self.detail_field,
            LevelKind::Label => &self.label_field,
        }
    }

    /// Replaces the text of a level field, as if typed.
    pub fn set_level_text(&mut self, kind: LevelKind, text: &str) {
        let field = match kind {
            LevelKind::Detail => &mut self.detail_field,
            LevelKind::Label => &mut self.label_field,
        };
        field.text = text.to_string();
    }

    /// Switch states as (transit, bike, walking).
    #[must_use]
    pub const fn switches(&self) -> (bool, bool, bool) {
        (self.transit_switch, self.bike_switch, self.walking_switch)
    }

    // === Style state ===

    /// Refreshes the color picker and level fields for the active style.
    pub fn set_ui_state_for_style(&mut self) {
        let style = self.active_style();
        let detail = LevelField::for_level(style.available_detail_levels(), style.detail_level);
        let label = LevelField::for_level(style.available_label_levels(), style.label_level);

        self.detail_field = detail;
        self.label_field = label;
        self.color_picker.clamp(self.color_row_count());

        if self.focus_is_disabled() {
            self.focus = FocusField::StylePicker;
        }
    }

    fn focus_is_disabled(&self) -> bool {
        match self.focus {
            FocusField::DetailLevel => !self.detail_field.enabled,
            FocusField::LabelLevel => !self.label_field.enabled,
            _ => false,
        }
    }

    // === Overlay switches ===

    /// Transit switch changed; writes straight through.
    pub fn transit_overlay_switch_changed(&mut self, is_on: bool, map: &mut MapController) {
        debug!(is_on, "transit overlay switch changed");
        self.transit_switch = is_on;
        map.show_transit_overlay = is_on;
    }

    /// Bike switch changed; turning it on turns walking off first.
    pub fn bike_overlay_switch_changed(&mut self, is_on: bool, map: &mut MapController) {
        debug!(is_on, "bike overlay switch changed");
        self.bike_switch = is_on;
        if is_on {
            self.walking_switch = false;
            map.show_walking_path_overlay = false;
        }
        map.show_bike_overlay = is_on;
    }

    /// Walking switch changed; turning it on turns bike off first.
    pub fn walking_overlay_switch_changed(&mut self, is_on: bool, map: &mut MapController) {
        debug!(is_on, "walking overlay switch changed");
        self.walking_switch = is_on;
        if is_on {
            self.bike_switch = false;
            map.show_bike_overlay = false;
        }
        map.show_walking_path_overlay = is_on;
    }

    // === Style picker ===

    /// Number of rows in the style picker.
    #[must_use]
    pub fn style_row_count(&self) -> usize {
        self.catalog.len()
    }

    /// Label of a style picker row.
    #[must_use]
    pub fn style_row_title(&self, row: usize) -> Option<&str> {
        self.catalog.name_at(row)
    }

    /// User landed on `row` of the style picker.
    pub fn select_style_row(&mut self, row: usize) {
        let Some(row) = self
            .catalog
            .name_at(row)
            .and_then(|name| self.catalog.index_of_name(name))
        else {
            return;
        };

        self.style_picker.selected = row;
        self.active = ActiveStyle::Catalog(row);
        debug!(style = %self.active_style().kind(), "style selected");
        self.set_ui_state_for_style();
    }

    // === Color picker ===

    /// Whether the color picker only shows the "N/A" placeholder.
    #[must_use]
    pub fn color_picker_is_placeholder(&self) -> bool {
        self.active_style().available_colors().is_empty()
            || self.catalog.name_at(self.style_picker.selected) == Some(NO_COLOR_STYLE_NAME)
    }

    /// Number of rows in the color picker.
    #[must_use]
    pub fn color_row_count(&self) -> usize {
        if self.color_picker_is_placeholder() {
            1
        } else {
            self.active_style().available_colors().len()
        }
    }

    /// Label of a color picker row.
    #[must_use]
    pub fn color_row_title(&self, row: usize) -> &str {
        if self.color_picker_is_placeholder() {
            return NOT_APPLICABLE;
        }
        self.active_style()
            .available_colors()
            .get(row)
            .copied()
            .unwrap_or(NOT_APPLICABLE)
    }

    /// User landed on `row` of the color picker.
    pub fn select_color_row(&mut self, row: usize) {
        self.color_picker.selected = row;

        // Zinc still takes its inherited colors even behind the "N/A" row
        if self.active_style().available_colors().is_empty() {
            return;
        }

        if let Some(color) = self.active_style().available_colors().get(row) {
            debug!(color, "color selected");
            self.active_style_mut().current_color = (*color).to_string();
        }
    }

    // === Save / cancel ===

    /// Parses, clamps and stores one level field into the active style.
    ///
    /// Unparseable text leaves the level untouched. Both levels are bounded
    /// by the style's label level count.
    pub fn save_text_field(&mut self, kind: LevelKind) {
        let Ok(mut level) = self.level_field(kind).text.parse::<i64>() else {
            return;
        };

        let bound = self.active_style().available_label_levels();
        if level > bound {
            level = bound;
        }
        if level < 0 {
            level = 0;
        }

        let style = self.active_style_mut();
        match kind {
            LevelKind::Detail => style.detail_level = level,
            LevelKind::Label => style.label_level = level,
        }
    }

    /// Stores both levels and hands the active style to the app settings.
    pub fn save(&mut self, settings: &mut AppSettings) {
        self.save_text_field(LevelKind::Label);
        self.save_text_field(LevelKind::Detail);
        settings.selected_style = self.active_style().clone();
        info!(
            style = %settings.selected_style.kind(),
            color = %settings.selected_style.current_color,
            detail = settings.selected_style.detail_level,
            label = settings.selected_style.label_level,
            "style saved"
        );
        self.closed = true;
    }

    /// Closes without writing the style.
    pub fn cancel(&mut self) {
        info!("style selection cancelled");
        self.closed = true;
    }

    // === Re-entry ===

    /// Re-selects picker rows to match the active style.
    pub fn on_appear(&mut self) {
        if let Some(row) = self.catalog.index_of_style(self.active_style()) {
            self.style_picker.selected = row;
        }

        let style = self.active_style();
        if !style.available_colors().is_empty() && !style.current_color.is_empty() {
            let color_row = style
                .available_colors()
                .iter()
                .position(|c| *c == style.current_color);
            if let Some(color_row) = color_row.filter(|r| *r < self.color_row_count()) {
                self.color_picker.selected = color_row;
            }
        }
    }

    // === Input ===

    fn toggle_focused_switch(&mut self, map: &mut MapController) {
        match self.focus {
            FocusField::TransitOverlay => {
                self.transit_overlay_switch_changed(!self.transit_switch, map);
            }
            FocusField::BikeOverlay => self.bike_overlay_switch_changed(!self.bike_switch, map),
            FocusField::WalkingOverlay => {
                self.walking_overlay_switch_changed(!self.walking_switch, map);
            }
            _ => {}
        }
    }

    fn step_focused_picker(&mut self, forward: bool) {
        match self.focus {
            FocusField::StylePicker => {
                let mut picker = self.style_picker;
                if forward {
                    picker.select_next(self.style_row_count());
                } else {
                    picker.select_previous(self.style_row_count());
                }
                self.select_style_row(picker.selected);
            }
            FocusField::ColorPicker => {
                let mut picker = self.color_picker;
                if forward {
                    picker.select_next(self.color_row_count());
                } else {
                    picker.select_previous(self.color_row_count());
                }
                self.select_color_row(picker.selected);
            }
            _ => {}
        }
    }

    fn focused_level_field_mut(&mut self) -> Option<&mut LevelField> {
        match self.focus {
            FocusField::DetailLevel => Some(&mut self.detail_field),
            FocusField::LabelLevel => Some(&mut self.label_field),
            _ => None,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let mut next = self.focus;
        for _ in 0..FocusField::all().len() {
            next = if forward { next.next() } else { next.previous() };
            let disabled = match next {
                FocusField::DetailLevel => !self.detail_field.enabled,
                FocusField::LabelLevel => !self.label_field.enabled,
                _ => false,
            };
            if !disabled {
                break;
            }
        }
        self.focus = next;
    }
}

impl ContextualComponent for StyleSelectionScreen {
    type Context = StyleScreenContext;
    type Event = StyleScreenEvent;

    fn handle_input(&mut self, key: KeyEvent, context: &mut Self::Context) -> Option<Self::Event> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => {
                    self.save(&mut context.app_settings);
                    Some(StyleScreenEvent::Saved)
                }
                KeyCode::Char('c') => {
                    self.cancel();
                    Some(StyleScreenEvent::Cancelled)
                }
                _ => None,
            };
        }

        let is_picker = matches!(self.focus, FocusField::StylePicker | FocusField::ColorPicker);

        match key.code {
            KeyCode::Esc => {
                self.cancel();
                Some(StyleScreenEvent::Cancelled)
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                None
            }
            KeyCode::Left => {
                self.step_focused_picker(false);
                None
            }
            KeyCode::Right => {
                self.step_focused_picker(true);
                None
            }
            KeyCode::Char('h') if is_picker => {
                self.step_focused_picker(false);
                None
            }
            KeyCode::Char('l') if is_picker => {
                self.step_focused_picker(true);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_focused_switch(&mut context.map_controller);
                None
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_level_field_mut() {
                    field.push_char(c);
                }
                None
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_level_field_mut() {
                    field.backspace();
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context) {
        render_style_screen(f, area, self, theme, context);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

/// Render the style screen
pub fn render_style_screen(
    f: &mut Frame,
    area: Rect,
    screen: &StyleSelectionScreen,
    theme: &Theme,
    context: &StyleScreenContext,
) {
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Pickers and fields
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let saved = &context.app_settings.selected_style;
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Saved: ", Style::default().fg(theme.text_muted)),
        Span::styled(saved.kind().display_name(), Style::default().fg(theme.success)),
        Span::styled("   Editing: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            screen.active_style().kind().display_name(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .title(" Map Style ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(chunks[1]);

    let style_rows: Vec<String> = (0..screen.style_row_count())
        .filter_map(|row| screen.style_row_title(row).map(str::to_string))
        .collect();
    render_picker(
        f,
        columns[0],
        FocusField::StylePicker,
        &style_rows,
        screen.selected_style_row(),
        screen.focus(),
        theme,
    );

    let color_rows: Vec<String> = (0..screen.color_row_count())
        .map(|row| screen.color_row_title(row).to_string())
        .collect();
    render_picker(
        f,
        columns[1],
        FocusField::ColorPicker,
        &color_rows,
        screen.selected_color_row(),
        screen.focus(),
        theme,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Detail level
            Constraint::Length(3), // Label density
            Constraint::Min(5),    // Overlays
        ])
        .split(columns[2]);

    render_level_field(
        f,
        right[0],
        FocusField::DetailLevel,
        screen.level_field(LevelKind::Detail),
        screen.focus(),
        theme,
    );
    render_level_field(
        f,
        right[1],
        FocusField::LabelLevel,
        screen.level_field(LevelKind::Label),
        screen.focus(),
        theme,
    );
    render_switches(f, right[2], screen, theme);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab/↑↓", Style::default().fg(theme.primary)),
        Span::raw(": Field  "),
        Span::styled("←/→", Style::default().fg(theme.primary)),
        Span::raw(": Pick  "),
        Span::styled("Space", Style::default().fg(theme.primary)),
        Span::raw(": Toggle  "),
        Span::styled("Ctrl+S", Style::default().fg(theme.primary)),
        Span::raw(": Save  "),
        Span::styled("Esc", Style::default().fg(theme.primary)),
        Span::raw(": Cancel"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
    .style(Style::default().fg(theme.text_muted));
    f.render_widget(help, chunks[2]);
}

fn border_style(field: FocusField, focus: FocusField, theme: &Theme) -> Style {
    if field == focus {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    }
}

fn render_picker(
    f: &mut Frame,
    area: Rect,
    field: FocusField,
    rows: &[String],
    selected: usize,
    focus: FocusField,
    theme: &Theme,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(Line::from(Span::styled(row.as_str(), Style::default().fg(theme.text)))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", field.display_name()))
                .borders(Borders::ALL)
                .border_style(border_style(field, focus, theme)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.surface)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(rows.len().saturating_sub(1))));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_level_field(
    f: &mut Frame,
    area: Rect,
    field: FocusField,
    level: &LevelField,
    focus: FocusField,
    theme: &Theme,
) {
    let text_style = if level.enabled {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let cursor = if level.enabled && field == focus { "█" } else { "" };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(level.text.as_str(), text_style),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .title(format!(" {} ", field.display_name()))
            .borders(Borders::ALL)
            .border_style(border_style(field, focus, theme)),
    );
    f.render_widget(paragraph, area);
}

fn render_switches(f: &mut Frame, area: Rect, screen: &StyleSelectionScreen, theme: &Theme) {
    let (transit, bike, walking) = screen.switches();
    let focus = screen.focus();

    let lines: Vec<Line> = [
        (FocusField::TransitOverlay, transit),
        (FocusField::BikeOverlay, bike),
        (FocusField::WalkingOverlay, walking),
    ]
    .iter()
    .map(|(field, is_on)| {
        let marker = if *field == focus { "▶ " } else { "  " };
        let (check, check_style) = if *is_on {
            ("[x] ", Style::default().fg(theme.success))
        } else {
            ("[ ] ", Style::default().fg(theme.text_muted))
        };
        let label_style = if *field == focus {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.primary)),
            Span::styled(check, check_style),
            Span::styled(field.display_name(), label_style),
        ])
    })
    .collect();

    let focused = matches!(
        focus,
        FocusField::TransitOverlay | FocusField::BikeOverlay | FocusField::WalkingOverlay
    );
    let border = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Overlays ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(paragraph, area);
}
