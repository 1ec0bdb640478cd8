//! Canned assistant replies.

pub const NEXT_BEST_ACTION: &str = "Basierend auf der Analyse deiner Deals und Kontakte empfehle ich folgende Aktionen:\n\n\
1. Nachfassen beim Schneider & Söhne Deal (Angebot vor 5 Tagen gesendet)\n\
2. Meeting mit Weber IT Solutions vereinbaren (Lead-Score 92)\n\
3. Follow-up E-Mail an Thomas Müller senden (seit 7 Tagen keine Interaktion)";

pub const PIPELINE_SUMMARY: &str = "Deine Pipeline enthält derzeit 19 aktive Deals im Gesamtwert von 1.245.000 €. Die wichtigsten Deals:\n\n\
• Müller AG - CRM System (85.000 €, 75%)\n\
• Becker Pharma - Consulting (120.000 €, 62%)\n\
• Schmidt Maschinenbau - Lizenzen (45.000 €, 88%)\n\n\
Soll ich eine detaillierte Pipeline-Analyse erstellen?";

pub const TOP_LEADS: &str = "Hier sind deine Top 5 Leads basierend auf AI-Scoring:\n\n\
• Thomas Weber (Weber IT Solutions) - Score: 94\n\
• Julia Schneider (Schneider & Söhne) - Score: 87\n\
• Michael Becker (Becker Pharma) - Score: 85\n\
• Laura Fischer (Fischer Elektronik) - Score: 82\n\
• Alexander Hoffmann (Hoffmann & Partner) - Score: 81\n\n\
Soll ich dir Details zu einem dieser Kontakte zeigen?";

pub const PERFORMANCE_STATS: &str = "Leistungsübersicht (aktuelle Woche):\n\n\
• Abschlussrate: 23% (+5% ggü. Vorwoche)\n\
• Durchschnittlicher Deal-Wert: 65.500 €\n\
• Response-Zeit: 3,2 Stunden\n\
• Lead-Konversionsrate: 18% (-2% ggü. Vorwoche)\n\n\
Bereichsverbesserung: Fokussiere auf die Konversionsrate im mittleren Funnel (+12% Potential).";

pub const FALLBACK: &str = "Ich habe deine Anfrage verstanden. Hier ist, was ich für dich tun kann:\n\n\
1. Kontakte und Deals analysieren\n\
2. Pipeline-Prognosen erstellen\n\
3. Nächste beste Aktionen vorschlagen\n\
4. Performance-Statistiken anzeigen\n\n\
Was genau möchtest du wissen?";

/// Greeting shown above the transcript before the first message.
pub const GREETING: &str = "Hallo! Ich bin dein KI-Assistent. Ich kann dir bei der Analyse deiner Deals helfen, \
Kontakte priorisieren, Statistiken anzeigen und vieles mehr. Was möchtest du wissen?";
