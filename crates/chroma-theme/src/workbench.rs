#![forbid(unsafe_code)]

//! Declarative workbench color table.
//!
//! Every editor-surface color key is one `(key, deriver)` entry in
//! [`WORKBENCH_COLORS`]; each deriver is a small pure function of the
//! [`ExtendedPalette`]. Building the color map is a single pass over
//! the table, so the completeness contract (the output contains every
//! declared key, for any valid palette) can be checked by iterating the
//! same table the builder consumes. The section groupings below are
//! organizational only, not runtime phases.

use std::collections::BTreeMap;

use chroma_color::{Rgb, opacity_hex};

use crate::palette::ExtendedPalette;

/// One output key and the function that derives its value.
pub struct ColorSpec {
    pub key: &'static str,
    pub derive: fn(&ExtendedPalette) -> String,
}

fn hex(color: Rgb) -> String {
    color.to_hex()
}

fn alpha(color: Rgb, opacity: f64) -> String {
    format!("{}{}", color.to_hex(), opacity_hex(opacity))
}

/// Build the flat workbench color map by evaluating every table entry.
pub fn build_workbench_colors(
    palette: &ExtendedPalette,
    specs: &[ColorSpec],
) -> BTreeMap<String, String> {
    specs
        .iter()
        .map(|spec| (spec.key.to_string(), (spec.derive)(palette)))
        .collect()
}

/// The full workbench table, grouped by surface.
pub const WORKBENCH_COLORS: &[ColorSpec] = &[
    // ── Base colors ────────────────────────────────────────────────
    ColorSpec { key: "focusBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "descriptionForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "disabledForeground", derive: |p| alpha(p.foreground, 0.5) },
    ColorSpec { key: "errorForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "icon.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "selection.background", derive: |p| alpha(p.accent(), 0.3) },
    ColorSpec { key: "widget.shadow", derive: |_| alpha(Rgb::BLACK, 0.36) },
    ColorSpec { key: "sash.hoverBorder", derive: |p| hex(p.accent()) },
    // ── Text content ───────────────────────────────────────────────
    ColorSpec { key: "textLink.foreground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "textLink.activeForeground", derive: |p| hex(p.accents.blue.light) },
    ColorSpec { key: "textBlockQuote.background", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "textBlockQuote.border", derive: |p| hex(p.accents.blue.dark) },
    ColorSpec { key: "textCodeBlock.background", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "textPreformat.foreground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "textSeparator.foreground", derive: |p| hex(p.backgrounds.raised()) },
    // ── Buttons ────────────────────────────────────────────────────
    ColorSpec { key: "button.background", derive: |p| hex(p.accent()) },
    ColorSpec { key: "button.foreground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "button.hoverBackground", derive: |p| hex(p.accents.blue.light) },
    ColorSpec { key: "button.secondaryBackground", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "button.secondaryForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "button.secondaryHoverBackground", derive: |p| hex(p.backgrounds.hover()) },
    // ── Dropdowns ──────────────────────────────────────────────────
    ColorSpec { key: "dropdown.background", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "dropdown.listBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "dropdown.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "dropdown.foreground", derive: |p| hex(p.foreground) },
    // ── Inputs ─────────────────────────────────────────────────────
    ColorSpec { key: "input.background", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "input.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "input.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "input.placeholderForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "inputOption.activeBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "inputOption.activeBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "inputOption.activeForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "inputValidation.errorBackground", derive: |p| hex(p.accents.red.dark) },
    ColorSpec { key: "inputValidation.errorBorder", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "inputValidation.infoBackground", derive: |p| hex(p.accents.blue.dark) },
    ColorSpec { key: "inputValidation.infoBorder", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "inputValidation.warningBackground", derive: |p| hex(p.accents.yellow.dark) },
    ColorSpec { key: "inputValidation.warningBorder", derive: |p| hex(p.accents.yellow.base) },
    // ── Scrollbars ─────────────────────────────────────────────────
    ColorSpec { key: "scrollbar.shadow", derive: |_| alpha(Rgb::BLACK, 0.2) },
    ColorSpec { key: "scrollbarSlider.background", derive: |p| alpha(p.foreground, 0.12) },
    ColorSpec { key: "scrollbarSlider.hoverBackground", derive: |p| alpha(p.foreground, 0.2) },
    ColorSpec { key: "scrollbarSlider.activeBackground", derive: |p| alpha(p.foreground, 0.3) },
    // ── Badges & progress ──────────────────────────────────────────
    ColorSpec { key: "badge.background", derive: |p| hex(p.accent()) },
    ColorSpec { key: "badge.foreground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "progressBar.background", derive: |p| hex(p.accent()) },
    // ── Lists and trees ────────────────────────────────────────────
    ColorSpec { key: "list.activeSelectionBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "list.activeSelectionForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "list.inactiveSelectionBackground", derive: |p| hex(p.backgrounds.hover()) },
    ColorSpec { key: "list.inactiveSelectionForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "list.focusBackground", derive: |p| alpha(p.accent(), 0.2) },
    ColorSpec { key: "list.focusForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "list.hoverBackground", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "list.hoverForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "list.dropBackground", derive: |p| alpha(p.accent(), 0.15) },
    ColorSpec { key: "list.highlightForeground", derive: |p| hex(p.accents.blue.light) },
    ColorSpec { key: "list.invalidItemForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "list.errorForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "list.warningForeground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "list.deemphasizedForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "list.filterMatchBackground", derive: |p| alpha(p.accents.yellow.base, 0.25) },
    ColorSpec { key: "list.filterMatchBorder", derive: |p| alpha(p.accents.yellow.base, 0.5) },
    ColorSpec { key: "listFilterWidget.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "listFilterWidget.outline", derive: |p| hex(p.accent()) },
    ColorSpec { key: "listFilterWidget.noMatchesOutline", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "tree.indentGuidesStroke", derive: |p| alpha(p.foreground, 0.16) },
    // ── Activity bar ───────────────────────────────────────────────
    ColorSpec { key: "activityBar.background", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "activityBar.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "activityBar.inactiveForeground", derive: |p| alpha(p.foreground, 0.4) },
    ColorSpec { key: "activityBar.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "activityBar.activeBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "activityBar.activeBackground", derive: |p| alpha(p.accent(), 0.1) },
    ColorSpec { key: "activityBarBadge.background", derive: |p| hex(p.accent()) },
    ColorSpec { key: "activityBarBadge.foreground", derive: |p| hex(p.backgrounds.canvas()) },
    // ── Side bar ───────────────────────────────────────────────────
    ColorSpec { key: "sideBar.background", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "sideBar.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "sideBar.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "sideBar.dropBackground", derive: |p| alpha(p.accent(), 0.15) },
    ColorSpec { key: "sideBarTitle.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "sideBarSectionHeader.background", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "sideBarSectionHeader.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "sideBarSectionHeader.border", derive: |p| hex(p.backgrounds.elevated()) },
    // ── Minimap ────────────────────────────────────────────────────
    ColorSpec { key: "minimap.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "minimap.selectionHighlight", derive: |p| alpha(p.accent(), 0.4) },
    ColorSpec { key: "minimap.findMatchHighlight", derive: |p| alpha(p.accents.yellow.base, 0.5) },
    ColorSpec { key: "minimap.errorHighlight", derive: |p| alpha(p.accents.red.base, 0.6) },
    ColorSpec { key: "minimap.warningHighlight", derive: |p| alpha(p.accents.yellow.base, 0.6) },
    ColorSpec { key: "minimapSlider.background", derive: |p| alpha(p.foreground, 0.08) },
    ColorSpec { key: "minimapSlider.hoverBackground", derive: |p| alpha(p.foreground, 0.14) },
    ColorSpec { key: "minimapSlider.activeBackground", derive: |p| alpha(p.foreground, 0.2) },
    ColorSpec { key: "minimapGutter.addedBackground", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "minimapGutter.modifiedBackground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "minimapGutter.deletedBackground", derive: |p| hex(p.accents.red.base) },
    // ── Editor groups & tabs ───────────────────────────────────────
    ColorSpec { key: "editorGroup.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "editorGroup.dropBackground", derive: |p| alpha(p.accent(), 0.15) },
    ColorSpec { key: "editorGroupHeader.tabsBackground", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "editorGroupHeader.tabsBorder", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "editorGroupHeader.noTabsBackground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "tab.activeBackground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "tab.activeForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "tab.activeBorderTop", derive: |p| hex(p.accent()) },
    ColorSpec { key: "tab.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "tab.inactiveBackground", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "tab.inactiveForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "tab.hoverBackground", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "tab.hoverBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "tab.unfocusedActiveBackground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "tab.unfocusedActiveForeground", derive: |p| alpha(p.foreground, 0.7) },
    ColorSpec { key: "tab.unfocusedInactiveForeground", derive: |p| alpha(p.foreground, 0.4) },
    // ── Editor core ────────────────────────────────────────────────
    ColorSpec { key: "editor.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "editor.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "editorLineNumber.foreground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "editorLineNumber.activeForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "editorCursor.foreground", derive: |p| hex(p.roles.cursor.color) },
    ColorSpec { key: "editorCursor.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "editor.selectionBackground", derive: |p| alpha(p.roles.selection.color, 0.8) },
    ColorSpec { key: "editor.inactiveSelectionBackground", derive: |p| alpha(p.roles.selection.color, 0.5) },
    ColorSpec { key: "editor.selectionHighlightBackground", derive: |p| alpha(p.roles.selection.color, 0.4) },
    ColorSpec { key: "editor.wordHighlightBackground", derive: |p| alpha(p.accent(), 0.15) },
    ColorSpec { key: "editor.wordHighlightStrongBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "editor.findMatchBackground", derive: |p| alpha(p.accents.yellow.base, 0.4) },
    ColorSpec { key: "editor.findMatchHighlightBackground", derive: |p| alpha(p.accents.yellow.base, 0.2) },
    ColorSpec { key: "editor.findRangeHighlightBackground", derive: |p| alpha(p.accent(), 0.1) },
    ColorSpec { key: "editor.hoverHighlightBackground", derive: |p| alpha(p.accent(), 0.12) },
    ColorSpec { key: "editor.lineHighlightBackground", derive: |p| alpha(p.foreground, 0.05) },
    ColorSpec { key: "editor.lineHighlightBorder", derive: |p| alpha(p.foreground, 0.0) },
    ColorSpec { key: "editor.rangeHighlightBackground", derive: |p| alpha(p.accent(), 0.08) },
    ColorSpec { key: "editorWhitespace.foreground", derive: |p| alpha(p.foreground, 0.16) },
    ColorSpec { key: "editorIndentGuide.background", derive: |p| alpha(p.foreground, 0.1) },
    ColorSpec { key: "editorIndentGuide.activeBackground", derive: |p| alpha(p.foreground, 0.24) },
    ColorSpec { key: "editorRuler.foreground", derive: |p| alpha(p.foreground, 0.12) },
    ColorSpec { key: "editorCodeLens.foreground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "editorBracketMatch.background", derive: |p| alpha(p.accent(), 0.2) },
    ColorSpec { key: "editorBracketMatch.border", derive: |p| hex(p.accent()) },
    ColorSpec { key: "editorLink.activeForeground", derive: |p| hex(p.accents.blue.light) },
    // ── Bracket pair colorization ──────────────────────────────────
    ColorSpec { key: "editorBracketHighlight.foreground1", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "editorBracketHighlight.foreground2", derive: |p| hex(p.accents.purple.base) },
    ColorSpec { key: "editorBracketHighlight.foreground3", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "editorBracketHighlight.foreground4", derive: |p| hex(p.accents.cyan.base) },
    ColorSpec { key: "editorBracketHighlight.foreground5", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "editorBracketHighlight.foreground6", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorBracketHighlight.unexpectedBracket.foreground", derive: |p| hex(p.accents.red.light) },
    // ── Overview ruler ─────────────────────────────────────────────
    ColorSpec { key: "editorOverviewRuler.border", derive: |p| alpha(p.foreground, 0.0) },
    ColorSpec { key: "editorOverviewRuler.findMatchForeground", derive: |p| alpha(p.accents.yellow.base, 0.5) },
    ColorSpec { key: "editorOverviewRuler.addedForeground", derive: |p| alpha(p.accents.green.base, 0.6) },
    ColorSpec { key: "editorOverviewRuler.modifiedForeground", derive: |p| alpha(p.accents.yellow.base, 0.6) },
    ColorSpec { key: "editorOverviewRuler.deletedForeground", derive: |p| alpha(p.accents.red.base, 0.6) },
    ColorSpec { key: "editorOverviewRuler.errorForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorOverviewRuler.warningForeground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "editorOverviewRuler.infoForeground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "editorOverviewRuler.bracketMatchForeground", derive: |p| hex(p.muted()) },
    // ── Diagnostics ────────────────────────────────────────────────
    ColorSpec { key: "editorError.foreground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorWarning.foreground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "editorInfo.foreground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "editorHint.foreground", derive: |p| hex(p.accents.cyan.base) },
    ColorSpec { key: "problemsErrorIcon.foreground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "problemsWarningIcon.foreground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "problemsInfoIcon.foreground", derive: |p| hex(p.accents.blue.base) },
    // ── Gutter ─────────────────────────────────────────────────────
    ColorSpec { key: "editorGutter.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "editorGutter.addedBackground", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "editorGutter.modifiedBackground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "editorGutter.deletedBackground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorGutter.foldingControlForeground", derive: |p| hex(p.muted()) },
    // ── Diff editor ────────────────────────────────────────────────
    ColorSpec { key: "diffEditor.insertedTextBackground", derive: |p| alpha(p.accents.green.base, 0.15) },
    ColorSpec { key: "diffEditor.removedTextBackground", derive: |p| alpha(p.accents.red.base, 0.15) },
    ColorSpec { key: "diffEditor.insertedLineBackground", derive: |p| alpha(p.accents.green.base, 0.1) },
    ColorSpec { key: "diffEditor.removedLineBackground", derive: |p| alpha(p.accents.red.base, 0.1) },
    ColorSpec { key: "diffEditor.diagonalFill", derive: |p| alpha(p.foreground, 0.1) },
    // ── Editor widgets ─────────────────────────────────────────────
    ColorSpec { key: "editorWidget.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "editorWidget.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "editorWidget.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "editorWidget.resizeBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "editorSuggestWidget.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "editorSuggestWidget.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "editorSuggestWidget.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "editorSuggestWidget.highlightForeground", derive: |p| hex(p.accents.blue.light) },
    ColorSpec { key: "editorSuggestWidget.selectedBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "editorHoverWidget.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "editorHoverWidget.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "editorHoverWidget.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "debugExceptionWidget.background", derive: |p| hex(p.accents.red.dark) },
    ColorSpec { key: "debugExceptionWidget.border", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorMarkerNavigation.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "editorMarkerNavigationError.background", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "editorMarkerNavigationWarning.background", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "editorMarkerNavigationInfo.background", derive: |p| hex(p.accents.blue.base) },
    // ── Peek view ──────────────────────────────────────────────────
    ColorSpec { key: "peekView.border", derive: |p| hex(p.accent()) },
    ColorSpec { key: "peekViewEditor.background", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "peekViewEditor.matchHighlightBackground", derive: |p| alpha(p.accents.yellow.base, 0.3) },
    ColorSpec { key: "peekViewResult.background", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "peekViewResult.fileForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "peekViewResult.lineForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "peekViewResult.matchHighlightBackground", derive: |p| alpha(p.accents.yellow.base, 0.3) },
    ColorSpec { key: "peekViewResult.selectionBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "peekViewResult.selectionForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "peekViewTitle.background", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "peekViewTitleDescription.foreground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "peekViewTitleLabel.foreground", derive: |p| hex(p.foreground) },
    // ── Merge conflicts ────────────────────────────────────────────
    ColorSpec { key: "merge.currentHeaderBackground", derive: |p| alpha(p.accents.green.base, 0.4) },
    ColorSpec { key: "merge.currentContentBackground", derive: |p| alpha(p.accents.green.base, 0.15) },
    ColorSpec { key: "merge.incomingHeaderBackground", derive: |p| alpha(p.accents.blue.base, 0.4) },
    ColorSpec { key: "merge.incomingContentBackground", derive: |p| alpha(p.accents.blue.base, 0.15) },
    ColorSpec { key: "merge.commonHeaderBackground", derive: |p| alpha(p.muted(), 0.4) },
    ColorSpec { key: "merge.commonContentBackground", derive: |p| alpha(p.muted(), 0.15) },
    // ── Panels ─────────────────────────────────────────────────────
    ColorSpec { key: "panel.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "panel.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "panel.dropBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "panelTitle.activeBorder", derive: |p| hex(p.accent()) },
    ColorSpec { key: "panelTitle.activeForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "panelTitle.inactiveForeground", derive: |p| hex(p.muted()) },
    // ── Status bar ─────────────────────────────────────────────────
    ColorSpec { key: "statusBar.background", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "statusBar.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "statusBar.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "statusBar.debuggingBackground", derive: |p| hex(p.accents.purple.dark) },
    ColorSpec { key: "statusBar.debuggingForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "statusBar.noFolderBackground", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "statusBar.noFolderForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "statusBarItem.hoverBackground", derive: |p| alpha(p.foreground, 0.12) },
    ColorSpec { key: "statusBarItem.activeBackground", derive: |p| alpha(p.foreground, 0.18) },
    ColorSpec { key: "statusBarItem.prominentBackground", derive: |p| hex(p.accents.blue.dark) },
    ColorSpec { key: "statusBarItem.prominentHoverBackground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "statusBarItem.remoteBackground", derive: |p| hex(p.accent()) },
    ColorSpec { key: "statusBarItem.remoteForeground", derive: |p| hex(p.backgrounds.canvas()) },
    // ── Title bar ──────────────────────────────────────────────────
    ColorSpec { key: "titleBar.activeBackground", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "titleBar.activeForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "titleBar.inactiveBackground", derive: |p| hex(p.backgrounds.panel()) },
    ColorSpec { key: "titleBar.inactiveForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "titleBar.border", derive: |p| hex(p.backgrounds.surface()) },
    // ── Menus ──────────────────────────────────────────────────────
    ColorSpec { key: "menubar.selectionBackground", derive: |p| alpha(p.foreground, 0.12) },
    ColorSpec { key: "menubar.selectionForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "menu.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "menu.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "menu.selectionBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "menu.selectionForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "menu.separatorBackground", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "menu.border", derive: |p| hex(p.backgrounds.raised()) },
    // ── Notifications ──────────────────────────────────────────────
    ColorSpec { key: "notificationCenter.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "notificationCenterHeader.background", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "notificationCenterHeader.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "notifications.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "notifications.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "notifications.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "notificationLink.foreground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "notificationsErrorIcon.foreground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "notificationsWarningIcon.foreground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "notificationsInfoIcon.foreground", derive: |p| hex(p.accents.blue.base) },
    // ── Extensions view ────────────────────────────────────────────
    ColorSpec { key: "extensionButton.prominentBackground", derive: |p| hex(p.accent()) },
    ColorSpec { key: "extensionButton.prominentForeground", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "extensionButton.prominentHoverBackground", derive: |p| hex(p.accents.blue.light) },
    ColorSpec { key: "extensionBadge.remoteBackground", derive: |p| hex(p.accent()) },
    ColorSpec { key: "extensionBadge.remoteForeground", derive: |p| hex(p.backgrounds.canvas()) },
    // ── Quick input ────────────────────────────────────────────────
    ColorSpec { key: "pickerGroup.border", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "pickerGroup.foreground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "quickInput.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "quickInput.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "quickInputList.focusBackground", derive: |p| alpha(p.accent(), 0.25) },
    ColorSpec { key: "quickInputTitle.background", derive: |p| hex(p.backgrounds.elevated()) },
    // ── Keybinding labels ──────────────────────────────────────────
    ColorSpec { key: "keybindingLabel.background", derive: |p| alpha(p.foreground, 0.1) },
    ColorSpec { key: "keybindingLabel.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "keybindingLabel.border", derive: |p| alpha(p.foreground, 0.16) },
    ColorSpec { key: "keybindingLabel.bottomBorder", derive: |p| alpha(p.foreground, 0.24) },
    // ── Terminal ───────────────────────────────────────────────────
    ColorSpec { key: "terminal.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "terminal.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "terminal.border", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "terminal.selectionBackground", derive: |p| alpha(p.roles.selection.color, 0.8) },
    ColorSpec { key: "terminalCursor.foreground", derive: |p| hex(p.roles.cursor.color) },
    ColorSpec { key: "terminalCursor.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "terminal.ansiBlack", derive: |p| hex(p.roles.ansi[0].color) },
    ColorSpec { key: "terminal.ansiRed", derive: |p| hex(p.roles.ansi[1].color) },
    ColorSpec { key: "terminal.ansiGreen", derive: |p| hex(p.roles.ansi[2].color) },
    ColorSpec { key: "terminal.ansiYellow", derive: |p| hex(p.roles.ansi[3].color) },
    ColorSpec { key: "terminal.ansiBlue", derive: |p| hex(p.roles.ansi[4].color) },
    ColorSpec { key: "terminal.ansiMagenta", derive: |p| hex(p.roles.ansi[5].color) },
    ColorSpec { key: "terminal.ansiCyan", derive: |p| hex(p.roles.ansi[6].color) },
    ColorSpec { key: "terminal.ansiWhite", derive: |p| hex(p.roles.ansi[7].color) },
    ColorSpec { key: "terminal.ansiBrightBlack", derive: |p| hex(p.roles.ansi[8].color) },
    ColorSpec { key: "terminal.ansiBrightRed", derive: |p| hex(p.roles.ansi[9].color) },
    ColorSpec { key: "terminal.ansiBrightGreen", derive: |p| hex(p.roles.ansi[10].color) },
    ColorSpec { key: "terminal.ansiBrightYellow", derive: |p| hex(p.roles.ansi[11].color) },
    ColorSpec { key: "terminal.ansiBrightBlue", derive: |p| hex(p.roles.ansi[12].color) },
    ColorSpec { key: "terminal.ansiBrightMagenta", derive: |p| hex(p.roles.ansi[13].color) },
    ColorSpec { key: "terminal.ansiBrightCyan", derive: |p| hex(p.roles.ansi[14].color) },
    ColorSpec { key: "terminal.ansiBrightWhite", derive: |p| hex(p.roles.ansi[15].color) },
    // ── Debug ──────────────────────────────────────────────────────
    ColorSpec { key: "debugToolBar.background", derive: |p| hex(p.backgrounds.overlay()) },
    ColorSpec { key: "debugIcon.breakpointForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "debugIcon.startForeground", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "debugIcon.stopForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "debugConsole.errorForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "debugConsole.warningForeground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "debugConsole.infoForeground", derive: |p| hex(p.accents.blue.base) },
    // ── Git decorations ────────────────────────────────────────────
    ColorSpec { key: "gitDecoration.addedResourceForeground", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "gitDecoration.modifiedResourceForeground", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "gitDecoration.deletedResourceForeground", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "gitDecoration.untrackedResourceForeground", derive: |p| hex(p.accents.cyan.base) },
    ColorSpec { key: "gitDecoration.ignoredResourceForeground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "gitDecoration.conflictingResourceForeground", derive: |p| hex(p.accents.purple.base) },
    ColorSpec { key: "gitDecoration.submoduleResourceForeground", derive: |p| hex(p.accents.blue.base) },
    // ── Breadcrumbs ────────────────────────────────────────────────
    ColorSpec { key: "breadcrumb.background", derive: |p| hex(p.backgrounds.canvas()) },
    ColorSpec { key: "breadcrumb.foreground", derive: |p| hex(p.muted()) },
    ColorSpec { key: "breadcrumb.focusForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "breadcrumb.activeSelectionForeground", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "breadcrumbPicker.background", derive: |p| hex(p.backgrounds.overlay()) },
    // ── Settings editor ────────────────────────────────────────────
    ColorSpec { key: "settings.headerForeground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "settings.modifiedItemIndicator", derive: |p| hex(p.accent()) },
    ColorSpec { key: "settings.dropdownBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "settings.dropdownBorder", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "settings.checkboxBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "settings.checkboxBorder", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "settings.textInputBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "settings.textInputBorder", derive: |p| hex(p.backgrounds.raised()) },
    ColorSpec { key: "settings.numberInputBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "settings.numberInputBorder", derive: |p| hex(p.backgrounds.raised()) },
    // ── Charts ─────────────────────────────────────────────────────
    ColorSpec { key: "charts.foreground", derive: |p| hex(p.foreground) },
    ColorSpec { key: "charts.lines", derive: |p| alpha(p.foreground, 0.5) },
    ColorSpec { key: "charts.red", derive: |p| hex(p.accents.red.base) },
    ColorSpec { key: "charts.blue", derive: |p| hex(p.accents.blue.base) },
    ColorSpec { key: "charts.yellow", derive: |p| hex(p.accents.yellow.base) },
    ColorSpec { key: "charts.green", derive: |p| hex(p.accents.green.base) },
    ColorSpec { key: "charts.purple", derive: |p| hex(p.accents.purple.base) },
    // ── Welcome page ───────────────────────────────────────────────
    ColorSpec { key: "welcomePage.buttonBackground", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "welcomePage.buttonHoverBackground", derive: |p| hex(p.backgrounds.elevated()) },
    ColorSpec { key: "welcomePage.progress.background", derive: |p| hex(p.backgrounds.surface()) },
    ColorSpec { key: "welcomePage.progress.foreground", derive: |p| hex(p.accent()) },
    ColorSpec { key: "walkThrough.embeddedEditorBackground", derive: |p| hex(p.backgrounds.panel()) },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ExtendedPalette, ThemeKind};
    use chroma_scheme::{ParseLimits, RawScheme, ReferencePalette, parse_scheme, resolve_roles};

    fn palette(text: &str) -> ExtendedPalette {
        let scheme = parse_scheme(text, &ParseLimits::default()).unwrap();
        let roles = resolve_roles(&scheme, &ReferencePalette::DEFAULT);
        ExtendedPalette::derive(&roles, ThemeKind::Dark)
    }

    #[test]
    fn output_contains_every_declared_key() {
        let colors = build_workbench_colors(&palette(""), WORKBENCH_COLORS);
        assert_eq!(colors.len(), WORKBENCH_COLORS.len());
        for spec in WORKBENCH_COLORS {
            assert!(colors.contains_key(spec.key), "missing {}", spec.key);
        }
    }

    #[test]
    fn table_keys_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for spec in WORKBENCH_COLORS {
            assert!(seen.insert(spec.key), "duplicate key {}", spec.key);
        }
    }

    #[test]
    fn every_value_is_six_or_eight_digit_hex() {
        let colors = build_workbench_colors(&palette("background=#101010"), WORKBENCH_COLORS);
        for (key, value) in &colors {
            assert!(
                value.len() == 7 || value.len() == 9,
                "{key} has malformed value {value}"
            );
            assert!(value.starts_with('#'), "{key} missing # prefix");
            assert!(
                value[1..].bytes().all(|b| b.is_ascii_hexdigit()),
                "{key} has non-hex value {value}"
            );
        }
    }

    #[test]
    fn editor_background_is_the_scheme_background() {
        let colors = build_workbench_colors(&palette("background=#1a1a1a"), WORKBENCH_COLORS);
        assert_eq!(colors["editor.background"], "#1a1a1a");
    }

    #[test]
    fn terminal_slots_mirror_the_role_table() {
        let colors = build_workbench_colors(&palette("color1=#ff0000"), WORKBENCH_COLORS);
        assert_eq!(colors["terminal.ansiRed"], "#ff0000");
    }

    #[test]
    fn defaulted_palette_still_fills_the_table() {
        let empty = RawScheme::default();
        let roles = resolve_roles(&empty, &ReferencePalette::DEFAULT);
        let palette = ExtendedPalette::derive(&roles, ThemeKind::Dark);
        let colors = build_workbench_colors(&palette, WORKBENCH_COLORS);
        assert_eq!(colors.len(), WORKBENCH_COLORS.len());
    }

    #[test]
    fn alternate_table_is_honored() {
        // The table is an explicit argument so tests can substitute one.
        const TINY: &[ColorSpec] = &[ColorSpec {
            key: "editor.background",
            derive: |p| p.backgrounds.canvas().to_hex(),
        }];
        let colors = build_workbench_colors(&palette("background=#050505"), TINY);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors["editor.background"], "#050505");
    }
}
