/// One PAM hit: the raw `(pam + protospacer)` window, still un-encoded, with
/// the chromosome it came from and the strand it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRecord {
    pub chromosome: String,
    pub position: u64,
    pub sequence: String,
    pub pam_right: bool,
    pub species_id: Option<u8>,
}

impl GuideRecord {
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        let pam_right = u8::from(self.pam_right);
        match self.species_id {
            Some(species_id) => {
                format!("{},{},{},{},{}", self.chromosome, self.position, self.sequence, pam_right, species_id)
            }
            None => format!("{},{},{},{}", self.chromosome, self.position, self.sequence, pam_right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_row_non_legacy() {
        let record = GuideRecord {
            chromosome: "MT".into(),
            position: 13,
            sequence: "ATCACCCTATTAACCACTCACGG".into(),
            pam_right: true,
            species_id: None,
        };
        assert_eq!(record.to_csv_row(), "MT,13,ATCACCCTATTAACCACTCACGG,1");
    }

    #[test]
    fn csv_row_legacy_appends_species_id() {
        let record = GuideRecord {
            chromosome: "MT".into(),
            position: 150,
            sequence: "CCTATTATTTATCGCACCTACGT".into(),
            pam_right: false,
            species_id: Some(3),
        };
        assert_eq!(record.to_csv_row(), "MT,150,CCTATTATTTATCGCACCTACGT,0,3");
    }
}
