use lonchera_model::{Country, StudentInput};

const NO_ALLERGIES: &str = "Ninguna";

const INSTRUCTIONS: &str = r#"1. Calcula el IMC y confirma si es bajo, normal, sobrepeso u obesidad.
2. Explica brevemente qué significa ese IMC para su edad.
3. Genera exactamente 5 propuestas de loncheras, variadas y no repetitivas.
   - Cada lonchera debe incluir obligatoriamente una bebida (agua, jugo natural, infusión, etc.).
   - Cada lonchera debe incluir:
     * Nombre de la lonchera (creativo y diferente en cada una).
     * Ingredientes con cantidades claras.
     * Explicación de por qué es adecuada para su edad y actividad.
     * Alternativas si hay alergias o preferencias.
4. Devuelve la respuesta en formato JSON ESTRICTO con esta estructura:

{
  "imc": {
    "valor": <número>,
    "categoria": "<texto>",
    "explicacion": "<texto>"
  },
  "loncheras": [
    {
      "nombre": "<texto>",
      "ingredientes": ["<texto>", "<texto>"],
      "explicacion": "<texto>",
      "alternativas": "<texto>"
    }
  ]
}
"#;

pub fn build(student: &StudentInput, country: Country) -> String {
    let mut prompt = format!(
        "Eres un nutricionista especializado en alimentación escolar en {country}.\n\
         Debes generar ideas de loncheras saludables y realistas, considerando ingredientes comunes de {country}\n\
         que sean fáciles de conseguir (ejemplo: papa, choclo, pan, frutas locales, etc.).\n\
         \n\
         Datos del estudiante:\n\
         - Nombre: {name}\n\
         - Edad: {age} años\n",
        country = country,
        name = student.name,
        age = student.age,
    );
    if let Some(grade) = student.grade.as_deref().filter(|g| !g.trim().is_empty()) {
        prompt.push_str(&format!("- Grado escolar: {}\n", grade.trim()));
    }
    prompt.push_str(&format!(
        "- Género: {sex}\n\
         - Peso: {weight} kg\n\
         - Estatura: {height} cm\n\
         - Actividad física: {activity}\n\
         - Alergias / preferencias: {allergies}\n\
         \n",
        sex = student.sex,
        weight = student.weight,
        height = student.height,
        activity = student.activity,
        allergies = student.allergies().unwrap_or(NO_ALLERGIES),
    ));
    prompt.push_str(INSTRUCTIONS);

    prompt
}
