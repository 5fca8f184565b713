mod wizard_vm;

pub use wizard_vm::{QuestionControlVm, QuestionVm, WizardStage, WizardVm};
