//! Help and welcome text for the interactive session

/// Get the command reference shown by `aide` / `help`
pub fn get_help_content() -> &'static str {
    r#"🛠️ COMMANDES DISPONIBLES
-------------------------
  Entrée, suivant, ok, fait, terminé   Passer à l'étape suivante
  guide, parcours, étapes              Voir tout le parcours
  où suis-je, état, progress           Ton état actuel
  aide, help                           Ce message
  q, quit, exit                        Quitter
"#
}

/// Get the banner printed when a session starts
pub fn get_welcome_content(title: Option<&str>, total: usize) -> String {
    let mut out = String::from("🚀 ");
    out.push_str(title.unwrap_or("Guide pas à pas"));
    out.push('\n');
    out.push_str(&format!(
        "{} étapes. Appuie sur Entrée pour avancer, tape 'aide' pour les commandes.\n",
        total
    ));
    out
}
