//! SPARQL SELECT queries, one per imported table.
//!
//! Selected variables are listed in the column order of the target table.

pub const CITIES: &str = r#"
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX schema: <http://schema.org/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX : <https://schools.ontotext.com/data/resource/ontology/>
SELECT DISTINCT ?city ?cityLabel
WHERE {
    ?city rdf:type schema:City;
          rdfs:label ?cityLabel.

    FILTER(lang(?cityLabel) = "bg")
}
"#;

/// Ordered by school then place so the first place of a school is stable.
pub const SCHOOLS: &str = r#"
PREFIX : <https://schools.ontotext.com/data/resource/ontology/>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX schema: <http://schema.org/>
SELECT DISTINCT ?school ?schoolName ?schoolPlace
WHERE {
    ?school rdf:type schema:School;
            schema:name ?schoolName;
            :place ?schoolPlace.

    ?schoolPlace rdf:type schema:City.

    FILTER(lang(?schoolName) = "bg")
}
ORDER BY ?school ?schoolPlace
"#;

pub const EXAM_SESSIONS: &str = r#"
PREFIX : <https://schools.ontotext.com/data/resource/ontology/>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT DISTINCT ?dzi ?date ?dziLabel ?comment
WHERE {
    ?dzi rdf:type :Dzi;
         :date ?date;
         rdfs:label ?dziLabel.

    OPTIONAL {
        ?dzi rdfs:comment ?comment.
        FILTER(lang(?comment) = "bg")
    }

    FILTER(lang(?dziLabel) = "bg")
}
ORDER BY ?date ?dzi
"#;

/// Ordered by observation so duplicate ids are adjacent and stable.
pub const SCORES: &str = r#"
PREFIX qb: <http://purl.org/linked-data/cube#>
PREFIX : <https://schools.ontotext.com/data/resource/ontology/>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
SELECT DISTINCT ?observation ?dzi ?school ?subject ?score ?grade ?gradeLevel ?quantity
WHERE {
    ?observation rdf:type qb:Observation;
                 :dzi ?dzi;
                 :school ?school;
                 :subject ?subject;
                 :grade_level ?gradeLevel;
                 :quantity_people ?quantity.

    OPTIONAL { ?observation :score ?score. }
    OPTIONAL { ?observation :grade_6 ?grade. }
}
ORDER BY ?observation ?school
"#;
