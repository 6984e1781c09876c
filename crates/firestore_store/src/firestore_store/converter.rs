use write_model::aggregate::InterestRecord;

use crate::schema::InterestDocumentData;

fn strings<T: ToString>(values: Option<&[T]>) -> Option<Vec<String>> {
    values.map(|values| values.iter().map(ToString::to_string).collect())
}

pub(crate) fn document_data_from_record(record: &InterestRecord) -> InterestDocumentData {
    let interest = record.interest();
    InterestDocumentData {
        id: record.id().to_string(),
        created_at: record.created_at().to_string(),
        source: InterestRecord::SOURCE.to_owned(),
        version: interest.schema_variant().version_tag().to_owned(),
        persona: interest.persona().to_string(),
        email: interest.email().to_string(),
        consent: true,
        name: interest.name().map(ToString::to_string),
        cities: strings(interest.cities()),
        countries: interest.countries().map(ToString::to_string),
        needs: strings(interest.needs()),
        accommodation_type: interest.accommodation_type().map(|it| it.to_string()),
        budget: interest.budget().map(|it| it.to_string()),
        duration: interest.duration().map(|it| it.to_string()),
        languages: strings(interest.languages()),
        nostr: interest.nostr().map(ToString::to_string),
        bio: interest.bio().map(ToString::to_string),
        start_date: interest.start_date().map(|it| it.to_string()),
        property_title: interest.property_title().map(ToString::to_string),
        property_location: interest.property_location().map(ToString::to_string),
        property_summary: interest.property_summary().map(ToString::to_string),
        user_agent: record.metadata().user_agent.clone(),
        ip_address: record.metadata().ip_address.clone(),
    }
}
