//! Built-in seed schedule used on first run and after a reset.
//!
//! Kept as a raw JSON document so it travels through the exact same
//! validation and decode path as a stored or imported schedule.

use anyhow::{Context, Result};

use crate::codec::{parse_document, ScheduleDocument};

const SEED_SCHEDULE_JSON: &str = r#"{
  "weeks": [
    {
      "week": 1,
      "mon": {
        "activities": [
          {
            "pillar": "Ser",
            "name": "Circulo de bienvenida",
            "description": "Presentaciones y acuerdos de convivencia del grupo.",
            "skills": ["Autoconocimiento", "Escucha activa"],
            "isFieldTrip": false
          },
          {
            "pillar": "Pensar",
            "name": "Mapa de intereses",
            "description": "Cada participante traza sus temas y metas del trimestre.",
            "isFieldTrip": false
          }
        ]
      },
      "wed": {
        "activities": [
          {
            "pillar": "Hacer",
            "name": "Taller de prototipos",
            "description": "Construccion rapida con carton y materiales reciclados.",
            "skills": ["Creatividad", "Trabajo manual"],
            "isFieldTrip": false
          }
        ]
      },
      "fri": {
        "activities": [
          {
            "pillar": "Social",
            "name": "Juegos cooperativos",
            "description": "Dinamicas de equipo en el patio.",
            "isFieldTrip": false
          }
        ]
      }
    },
    {
      "week": 2,
      "tue": {
        "activities": [
          {
            "pillar": "Pensar",
            "name": "Club de debate",
            "description": "Primer debate: tecnologia en el aula.",
            "skills": ["Argumentacion", "Pensamiento critico"],
            "isFieldTrip": false
          }
        ]
      },
      "thu": {
        "activities": [
          {
            "pillar": "Social",
            "name": "Charla con emprendedora local",
            "description": "Sesion de preguntas con invitada del mercado central.",
            "isFieldTrip": false,
            "guestSpeaker": true
          }
        ]
      }
    },
    {
      "week": 3,
      "mon": {
        "activities": [
          {
            "pillar": "Ser",
            "name": "Diario reflexivo",
            "description": "Escritura guiada sobre la semana anterior.",
            "isFieldTrip": false
          }
        ]
      },
      "sat": {
        "activities": [
          {
            "pillar": "Hacer",
            "name": "Visita al museo de ciencias",
            "description": "Recorrido por la sala de energia y taller practico.",
            "skills": ["Observacion", "Curiosidad"],
            "isFieldTrip": true
          }
        ]
      }
    },
    { "week": 4 },
    { "week": 5 },
    { "week": 6 },
    { "week": 7 },
    { "week": 8 },
    { "week": 9 },
    { "week": 10 },
    { "week": 11 },
    { "week": 12 }
  ]
}
"#;

/// Parses the embedded seed through the normal codec path.
pub fn seed_document() -> Result<ScheduleDocument> {
    parse_document(SEED_SCHEDULE_JSON).context("Built-in seed schedule is malformed")
}
