//! Telegram-HTML rendering of player records

use crate::domain::PlayerRecord;

/// Expand a single-letter position code into its Russian label.
///
/// Both the Cyrillic letter and its Latin lookalike appear in source exports
/// for forwards. Unknown codes pass through trimmed.
pub fn position_label(code: &str) -> String {
    match code.trim() {
        "Н" | "H" => "Нападающий".to_string(),
        "З" => "Защитник".to_string(),
        "В" => "Вратарь".to_string(),
        other => other.to_string(),
    }
}

/// Render one player card in the Telegram HTML markup subset.
///
/// The main stat line is always present, even when the source carried
/// placeholders. The secondary line and the profile link appear only when
/// the record has something to show there.
pub fn format_player_card(player: &PlayerRecord) -> String {
    let mut lines = vec![
        format!("<b>{}</b>", player.name),
        format!("Команда: {} ({})", player.team, player.team_abbr),
        format!("Амплуа: {}", position_label(&player.position)),
        format!(
            "И: {}  Ш: {}  А: {}  О: {}  +/-: {}",
            player.games_played, player.goals, player.assists, player.points, player.plus_minus
        ),
    ];

    let extras: Vec<String> = [
        ("Штр", &player.penalty_minutes),
        ("БВ", &player.faceoff_wins),
        ("%БВ", &player.faceoff_pct),
        ("Ср.время", &player.time_on_ice),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect();
    if !extras.is_empty() {
        lines.push(extras.join(" | "));
    }

    if !player.profile_url.is_empty() {
        lines.push(format!(
            "<a href=\"{}\">Профиль на Allhockey</a>",
            player.profile_url
        ));
    }

    lines.join("\n")
}
